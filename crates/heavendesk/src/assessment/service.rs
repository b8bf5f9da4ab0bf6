use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::domain::{Lead, RawAnswers, ResultId, ScoreReport};
use super::repository::{
    AssessmentRecord, Audience, NewAssessment, Notice, Notifier, ResultStore, StoreError,
};
use super::scoring::ScoringEngine;

/// Where result links point and who hears about new submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySettings {
    pub base_url: String,
    pub operator_email: Option<String>,
    pub booking_url: String,
}

impl DeliverySettings {
    pub fn result_url(&self, id: &ResultId) -> String {
        format!("{}/results/{}", self.base_url.trim_end_matches('/'), id)
    }
}

/// A validated inbound request. `answers` stays untyped until scoring so that
/// the stored payload matches what the visitor sent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSubmission {
    pub lead: Lead,
    pub lead_payload: Value,
    pub answers: Value,
}

impl AssessmentSubmission {
    /// Parses a `{lead, answers}` body. Both fields are required; `lead` must be
    /// an object, `answers` may be anything (non-objects score as empty).
    pub fn from_json(body: &[u8]) -> Result<Self, SubmissionError> {
        let value: Value = serde_json::from_slice(body).map_err(SubmissionError::Malformed)?;
        let object = value.as_object().ok_or(SubmissionError::NotAnObject)?;

        let present = |field: &str| object.get(field).filter(|value| !value.is_null());
        let lead_payload = present("lead");
        let answers = present("answers");

        let mut missing = Vec::new();
        if lead_payload.is_none() {
            missing.push("lead");
        }
        if answers.is_none() {
            missing.push("answers");
        }
        let (Some(lead_payload), Some(answers)) = (lead_payload, answers) else {
            return Err(SubmissionError::MissingFields(missing));
        };

        if !lead_payload.is_object() {
            return Err(SubmissionError::InvalidLead);
        }

        Ok(Self {
            lead: Lead::from_value(lead_payload),
            lead_payload: lead_payload.clone(),
            answers: answers.clone(),
        })
    }

    pub fn payload(&self) -> Value {
        json!({ "lead": self.lead_payload, "answers": self.answers })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("request body is not valid JSON: {0}")]
    Malformed(serde_json::Error),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("lead must be an object")]
    InvalidLead,
}

/// What the visitor gets back after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub result_id: ResultId,
    pub result_url: String,
    pub report: ScoreReport,
}

/// Scores submissions, stores them once and sends best-effort notices.
pub struct AssessmentService<S, N> {
    store: Arc<S>,
    notifier: Arc<N>,
    engine: Arc<ScoringEngine>,
    delivery: DeliverySettings,
}

impl<S, N> AssessmentService<S, N>
where
    S: ResultStore + 'static,
    N: Notifier + 'static,
{
    pub fn new(
        store: Arc<S>,
        notifier: Arc<N>,
        engine: ScoringEngine,
        delivery: DeliverySettings,
    ) -> Self {
        Self {
            store,
            notifier,
            engine: Arc::new(engine),
            delivery,
        }
    }

    pub fn delivery(&self) -> &DeliverySettings {
        &self.delivery
    }

    pub fn score(&self, answers: &RawAnswers) -> ScoreReport {
        self.engine.score(answers)
    }

    /// Scores and stores a submission, then hands notices for the operator and,
    /// when an address was given, the visitor to a background task. Only the
    /// store write can fail the call; delivery never delays the receipt.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionReceipt, AssessmentServiceError> {
        let answers = RawAnswers::from_value(&submission.answers);
        let report = self.engine.score(&answers);
        let payload = submission.payload();

        let result_id = self.store.save(NewAssessment {
            lead: submission.lead.clone(),
            payload: payload.clone(),
            report: report.clone(),
            submitted_at: Utc::now(),
        })?;
        let result_url = self.delivery.result_url(&result_id);

        info!(
            result_id = %result_id,
            overall_score = report.overall_score,
            tier = %report.tier,
            "assessment stored"
        );

        let mut recipients = Vec::new();
        if let Some(operator) = &self.delivery.operator_email {
            recipients.push((Audience::Operator, operator.clone()));
        }
        if let Some(email) = submission.lead.email() {
            recipients.push((Audience::Visitor, email.to_string()));
        }

        let notices: Vec<Notice> = recipients
            .into_iter()
            .map(|(audience, recipient)| Notice {
                audience,
                recipient,
                result_id: result_id.clone(),
                result_url: result_url.clone(),
                lead: submission.lead.clone(),
                report: report.clone(),
                payload: payload.clone(),
            })
            .collect();
        if !notices.is_empty() {
            tokio::spawn(deliver(Arc::clone(&self.notifier), notices));
        }

        Ok(SubmissionReceipt {
            result_id,
            result_url,
            report,
        })
    }

    pub fn result(
        &self,
        result_id: &ResultId,
    ) -> Result<Option<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.store.load(result_id)?)
    }
}

/// Sends notices in order; failures are logged and dropped.
async fn deliver<N: Notifier + 'static>(notifier: Arc<N>, notices: Vec<Notice>) {
    for notice in notices {
        let result_id = notice.result_id.clone();
        let recipient = notice.recipient.clone();
        let audience = notice.audience;
        if let Err(err) = notifier.notify(notice).await {
            warn!(
                result_id = %result_id,
                %recipient,
                ?audience,
                error = %err,
                "assessment notification failed"
            );
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
