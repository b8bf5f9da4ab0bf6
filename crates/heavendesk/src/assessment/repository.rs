use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{Lead, ResultId, ScoreReport};

/// A scored submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssessment {
    pub lead: Lead,
    /// The submitted `{lead, answers}` body, kept for audits.
    pub payload: Value,
    pub report: ScoreReport,
    pub submitted_at: DateTime<Utc>,
}

/// Stored assessment as returned by [`ResultStore::load`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: ResultId,
    pub lead: Lead,
    pub payload: Value,
    pub report: ScoreReport,
    pub submitted_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn from_new(id: ResultId, assessment: NewAssessment) -> Self {
        let NewAssessment {
            lead,
            payload,
            report,
            submitted_at,
        } = assessment;
        Self {
            id,
            lead,
            payload,
            report,
            submitted_at,
        }
    }
}

/// Durable storage for scored assessments. Records are written once.
pub trait ResultStore: Send + Sync {
    fn save(&self, assessment: NewAssessment) -> Result<ResultId, StoreError>;
    fn load(&self, id: &ResultId) -> Result<Option<AssessmentRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}

/// Who a notice is written for; decides the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Operator,
    Visitor,
}

/// Everything an adapter needs to tell someone about a finished assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub audience: Audience,
    pub recipient: String,
    pub result_id: ResultId,
    pub result_url: String,
    pub lead: Lead,
    pub report: ScoreReport,
    pub payload: Value,
}

/// Outbound delivery of assessment summaries (e-mail and the like).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
    #[error("notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
