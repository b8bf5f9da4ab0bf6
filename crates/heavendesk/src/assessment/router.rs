use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use super::catalog::{total_questions, SectionDefinition, CATALOG};
use super::domain::{ResultId, SectionScore};
use super::repository::{AssessmentRecord, Notifier, ResultStore};
use super::service::{
    AssessmentService, AssessmentSubmission, SubmissionError, SubmissionReceipt,
};

/// HTTP endpoints for taking the quiz and viewing results.
pub fn assessment_router<S, N>(service: Arc<AssessmentService<S, N>>) -> Router
where
    S: ResultStore + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/assessment/questions", get(questions_handler))
        .route("/api/submit-assessment", post(submit_handler::<S, N>))
        .route("/results/:result_id", get(result_handler::<S, N>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitResponse {
    ok: bool,
    id: ResultId,
    result_url: String,
    overall_score: u8,
    tier: String,
    sections: Vec<SectionScore>,
    recommendations: Vec<String>,
    quick_wins: Vec<String>,
}

impl From<SubmissionReceipt> for SubmitResponse {
    fn from(receipt: SubmissionReceipt) -> Self {
        let SubmissionReceipt {
            result_id,
            result_url,
            report,
        } = receipt;
        Self {
            ok: true,
            id: result_id,
            result_url,
            overall_score: report.overall_score,
            tier: report.tier,
            sections: report.sections,
            recommendations: report.recommendations,
            quick_wins: report.quick_wins,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultView {
    found: bool,
    result_id: ResultId,
    overall_score: u8,
    tier: String,
    sections: Vec<SectionScore>,
    recommendations: Vec<String>,
    quick_wins: Vec<String>,
    submitted_at: DateTime<Utc>,
    booking_url: String,
}

impl ResultView {
    fn from_record(record: AssessmentRecord, booking_url: &str) -> Self {
        let report = record.report;
        Self {
            found: true,
            result_id: record.id,
            overall_score: report.overall_score,
            tier: report.tier,
            sections: report.sections,
            recommendations: report.recommendations,
            quick_wins: report.quick_wins,
            submitted_at: record.submitted_at,
            booking_url: booking_url.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionsResponse {
    total_questions: usize,
    sections: &'static [SectionDefinition],
}

pub(crate) async fn questions_handler() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        total_questions: total_questions(),
        sections: &CATALOG,
    })
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "ok": false, "error": message }))).into_response()
}

pub(crate) async fn submit_handler<S, N>(
    State(service): State<Arc<AssessmentService<S, N>>>,
    body: Bytes,
) -> Response
where
    S: ResultStore + 'static,
    N: Notifier + 'static,
{
    let submission = match AssessmentSubmission::from_json(&body) {
        Ok(submission) => submission,
        Err(SubmissionError::MissingFields(missing)) => {
            let payload = json!({
                "ok": false,
                "error": "Missing required fields.",
                "missing": missing,
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
        Err(err) => {
            warn!(error = %err, "rejected assessment submission");
            return failure(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    match service.submit(submission).await {
        Ok(receipt) => (StatusCode::OK, Json(SubmitResponse::from(receipt))).into_response(),
        Err(err) => {
            error!(error = %err, "failed to save assessment");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save assessment.")
        }
    }
}

pub(crate) async fn result_handler<S, N>(
    State(service): State<Arc<AssessmentService<S, N>>>,
    Path(result_id): Path<String>,
) -> Response
where
    S: ResultStore + 'static,
    N: Notifier + 'static,
{
    let id = ResultId(result_id);
    match service.result(&id) {
        Ok(Some(record)) => {
            let view = ResultView::from_record(record, &service.delivery().booking_url);
            (StatusCode::OK, Json(view)).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "found": false,
                "resultId": id,
                "message": "We couldn’t find that assessment. The link may be invalid or the result has been removed.",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => {
            error!(result_id = %id, error = %err, "failed to load assessment");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected error loading assessment.",
            )
        }
    }
}
