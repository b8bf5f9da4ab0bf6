use async_trait::async_trait;
use heavendesk::assessment::{
    AssessmentRecord, NewAssessment, Notice, Notifier, NotifyError, ResendConfig, ResendNotifier,
    ResultId, ResultStore, StoreError, TracingNotifier,
};
use heavendesk::config::NotificationConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local result storage. Results are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResultStore {
    records: Arc<Mutex<HashMap<ResultId, AssessmentRecord>>>,
}

impl InMemoryResultStore {
    pub(crate) fn len(&self) -> usize {
        self.records.lock().expect("result store mutex poisoned").len()
    }
}

impl ResultStore for InMemoryResultStore {
    fn save(&self, assessment: NewAssessment) -> Result<ResultId, StoreError> {
        let mut guard = self.records.lock().expect("result store mutex poisoned");
        let id = ResultId::generate();
        if guard.contains_key(&id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(id.clone(), AssessmentRecord::from_new(id.clone(), assessment));
        Ok(id)
    }

    fn load(&self, id: &ResultId) -> Result<Option<AssessmentRecord>, StoreError> {
        let guard = self.records.lock().expect("result store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Resend when an API key is configured, otherwise notices are only logged.
pub(crate) enum ConfiguredNotifier {
    Resend(ResendNotifier),
    Log(TracingNotifier),
}

impl ConfiguredNotifier {
    pub(crate) fn from_config(config: &NotificationConfig) -> Result<Self, NotifyError> {
        match &config.resend_api_key {
            Some(api_key) => {
                let resend = ResendConfig::new(
                    api_key.clone(),
                    config.from.clone(),
                    config.booking_url.clone(),
                );
                Ok(Self::Resend(ResendNotifier::new(resend)?))
            }
            None => Ok(Self::Log(TracingNotifier::new(config.booking_url.clone()))),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Resend(_) => "resend",
            Self::Log(_) => "log",
        }
    }
}

#[async_trait]
impl Notifier for ConfiguredNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        match self {
            Self::Resend(notifier) => notifier.notify(notice).await,
            Self::Log(notifier) => notifier.notify(notice).await,
        }
    }
}
