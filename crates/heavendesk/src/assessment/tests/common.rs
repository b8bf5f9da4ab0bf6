use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::{json, Value};

use crate::assessment::domain::ResultId;
use crate::assessment::repository::{
    AssessmentRecord, NewAssessment, Notice, Notifier, NotifyError, ResultStore, StoreError,
};
use crate::assessment::{assessment_router, AssessmentService, DeliverySettings, ScoringEngine};

pub(super) const OPERATOR: &str = "ops@heavendesk.test";

pub(super) fn delivery() -> DeliverySettings {
    DeliverySettings {
        base_url: "https://heavendesk.test/".to_string(),
        operator_email: Some(OPERATOR.to_string()),
        booking_url: "https://calendly.test/heavendesk".to_string(),
    }
}

pub(super) fn lead_payload() -> Value {
    json!({
        "name": "Dana Reyes",
        "email": "dana@reyesdental.test",
        "phone": "555-0100",
        "company": "Reyes Dental",
    })
}

/// Front desk fully manual, sales fully automated.
pub(super) fn submission_body() -> Value {
    json!({
        "lead": lead_payload(),
        "answers": {
            "frontDesk": [0, 0, 0, 0, 0, 0],
            "sales": [3, 3, 3, 3, 3, 3],
        },
    })
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryStore, MemoryNotifier>,
    Arc<MemoryStore>,
    Arc<MemoryNotifier>,
) {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentService::new(
        store.clone(),
        notifier.clone(),
        ScoringEngine::default(),
        delivery(),
    );
    (service, store, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<HashMap<ResultId, AssessmentRecord>>>,
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }
}

impl ResultStore for MemoryStore {
    fn save(&self, assessment: NewAssessment) -> Result<ResultId, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let id = ResultId::generate();
        if guard.contains_key(&id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(id.clone(), AssessmentRecord::from_new(id.clone(), assessment));
        Ok(id)
    }

    fn load(&self, id: &ResultId) -> Result<Option<AssessmentRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn save(&self, _assessment: NewAssessment) -> Result<ResultId, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn load(&self, _id: &ResultId) -> Result<Option<AssessmentRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }

    /// Delivery runs on a spawned task; poll until `count` notices arrived.
    pub(super) async fn wait_for(&self, count: usize) -> Vec<Notice> {
        for _ in 0..200 {
            let notices = self.notices();
            if notices.len() >= count {
                return notices;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.notices()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _notice: Notice) -> Result<(), NotifyError> {
        Err(NotifyError::Rejected {
            status: 422,
            body: "invalid from address".to_string(),
        })
    }
}

/// Accepts every notice, but only after `delay`.
pub(super) struct SlowNotifier {
    pub(super) delay: Duration,
    pub(super) inner: MemoryNotifier,
}

#[async_trait]
impl Notifier for SlowNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        tokio::time::sleep(self.delay).await;
        self.inner.notify(notice).await
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service<S, N>(service: AssessmentService<S, N>) -> axum::Router
where
    S: ResultStore + 'static,
    N: Notifier + 'static,
{
    assessment_router(Arc::new(service))
}
