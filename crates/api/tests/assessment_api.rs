//! HTTP-level integration tests for the `/assessments` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router,
//! with the scripted oracle standing in for the inference service.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_session, get, post_json};
use serde_json::json;
use visaprep_oracle::scripted::ScriptedOracle;

// ---------------------------------------------------------------------------
// Test: GET /health reports status and oracle mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health() {
    let (app, _store) = build_test_app(Arc::new(ScriptedOracle::new()));
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["oracle_mode"], "scripted");
    assert_eq!(json["sessions"], 0);
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/assessments returns a full 8-criterion assessment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_assessment() {
    let oracle = ScriptedOracle::new().with_met_criteria([
        "Awards",
        "Judging",
        "High Salary",
        "Membership",
        "Scholarly Articles",
    ]);
    let (app, _store) = build_test_app(Arc::new(oracle));

    let response = post_json(
        &app,
        "/api/v1/assessments",
        json!({ "resume_text": "A resume full of achievements", "filename": "resume.pdf" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["session_id"].as_str().is_some());
    assert_eq!(data["filename"], "resume.pdf");
    assert_eq!(data["assessment"]["criteria"].as_array().unwrap().len(), 8);
    assert_eq!(data["assessment"]["score"], 5);
    assert_eq!(data["assessment"]["tier"], "Strong");
}

// ---------------------------------------------------------------------------
// Test: empty resume text yields a degraded assessment, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_assessment_empty_text_degrades() {
    let (app, _store) = build_test_app(Arc::new(ScriptedOracle::new()));

    let response = post_json(&app, "/api/v1/assessments", json!({ "resume_text": "" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let assessment = &json["data"]["assessment"];
    assert_eq!(assessment["score"], 0);
    assert_eq!(assessment["tier"], "Needs Work");
    let criteria = assessment["criteria"].as_array().unwrap();
    assert_eq!(criteria.len(), 8);
    for c in criteria {
        assert_eq!(c["met"], false);
        assert!(c["reasoning"]
            .as_str()
            .unwrap()
            .contains("could not be parsed or is empty"));
    }
}

// ---------------------------------------------------------------------------
// Test: an oracle outage during bulk assessment also degrades
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_assessment_oracle_failure_degrades() {
    let (app, _store) = build_test_app(Arc::new(ScriptedOracle::failing_unavailable()));

    let response = post_json(
        &app,
        "/api/v1/assessments",
        json!({ "resume_text": "A perfectly good resume" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let assessment = &json["data"]["assessment"];
    assert_eq!(assessment["score"], 0);
    assert_eq!(assessment["tier"], "Needs Work");
}

// ---------------------------------------------------------------------------
// Test: oversized resume text is rejected with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_assessment_oversized_text_returns_400() {
    let (app, _store) = build_test_app(Arc::new(ScriptedOracle::new()));

    let response = post_json(
        &app,
        "/api/v1/assessments",
        json!({ "resume_text": "x".repeat(200_001) }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/assessments/{id} round-trips the stored assessment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_assessment_round_trip() {
    let oracle = ScriptedOracle::new().with_met_criteria(["Awards", "Judging", "High Salary"]);
    let (app, _store) = build_test_app(Arc::new(oracle));

    let session_id = create_session(&app, "resume text").await;
    let response = get(&app, &format!("/api/v1/assessments/{session_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["session_id"], session_id.as_str());
    assert_eq!(json["data"]["assessment"]["score"], 3);
    assert_eq!(json["data"]["assessment"]["tier"], "Moderate");
}

// ---------------------------------------------------------------------------
// Test: unknown session key returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_unknown_session_returns_404() {
    let (app, _store) = build_test_app(Arc::new(ScriptedOracle::new()));

    let response = get(&app, "/api/v1/assessments/no-such-key").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "SESSION_NOT_FOUND");
}
