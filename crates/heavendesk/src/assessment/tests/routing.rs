use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::assessment::scoring::templates_for;
use crate::assessment::{AssessmentService, ScoringEngine};

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize")))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn questions_route_lists_catalog() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/assessment/questions"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["totalQuestions"], 48);
    assert_eq!(body["sections"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["sections"][0]["key"], "frontDesk");
    assert_eq!(
        body["sections"][0]["questions"][0]["options"]
            .as_array()
            .map(Vec::len),
        Some(4)
    );
}

#[tokio::test]
async fn submit_then_view_result() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(post_json("/api/submit-assessment", &submission_body()))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["overallScore"], 50);
    assert_eq!(body["tier"], "Big Wins Available");
    assert_eq!(body["sections"][0]["key"], "frontDesk");
    assert_eq!(body["sections"][0]["score"], 100);
    let id = body["id"].as_str().expect("id is a string").to_string();
    assert_eq!(
        body["resultUrl"],
        format!("https://heavendesk.test/results/{id}")
    );

    let response = router
        .oneshot(get(&format!("/results/{id}")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let view = read_json_body(response).await;
    assert_eq!(view["found"], true);
    assert_eq!(view["resultId"], id.as_str());
    assert_eq!(view["overallScore"], 50);
    assert_eq!(view["bookingUrl"], "https://calendly.test/heavendesk");
    assert_eq!(view["recommendations"], body["recommendations"]);
    assert!(view["submittedAt"].is_string());
}

#[tokio::test]
async fn fully_manual_front_desk_is_top_tier() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);
    let payload = json!({
        "lead": { "email": "a@b.com" },
        "answers": { "frontDesk": [0, 0, 0, 0, 0, 0] },
    });

    let response = router
        .oneshot(post_json("/api/submit-assessment", &payload))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["overallScore"], 100);
    assert_eq!(body["tier"], "Already Running Smoothly");
    assert_eq!(body["sections"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["sections"][0]["score"], 100);
    assert_eq!(body["recommendations"][0], templates_for("frontDesk")[0]);
    assert_eq!(body["quickWins"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn missing_fields_are_listed() {
    let (service, store, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/submit-assessment",
            &json!({ "lead": { "name": "Sam" } }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json_body(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Missing required fields.");
    assert_eq!(body["missing"], json!(["answers"]));
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn unparseable_body_is_a_bad_request() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let request = Request::post("/api/submit-assessment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"lead\":"))
        .expect("request builds");
    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json_body(response).await;
    assert_eq!(body["ok"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn store_failure_returns_internal_error() {
    let service = AssessmentService::new(
        Arc::new(UnavailableStore),
        Arc::new(MemoryNotifier::default()),
        ScoringEngine::default(),
        delivery(),
    );
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(post_json("/api/submit-assessment", &submission_body()))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Failed to save assessment.");

    let response = router
        .oneshot(get("/results/anything"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unknown_result_is_not_found() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/results/does-not-exist"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json_body(response).await;
    assert_eq!(body["found"], false);
    assert_eq!(body["resultId"], "does-not-exist");
}

#[tokio::test]
async fn notifier_failure_still_returns_result() {
    let service = AssessmentService::new(
        Arc::new(MemoryStore::default()),
        Arc::new(FailingNotifier),
        ScoringEngine::default(),
        delivery(),
    );
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json("/api/submit-assessment", &submission_body()))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}
