#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use visaprep_api::config::ServerConfig;
use visaprep_api::routes;
use visaprep_api::state::AppState;
use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::chat::ChatTurn;
use visaprep_oracle::config::{OracleConfig, OracleMode};
use visaprep_oracle::error::OracleError;
use visaprep_oracle::scripted::ScriptedOracle;
use visaprep_oracle::{EvidenceOracle, OracleReply, RescoreOutcome};
use visaprep_store::SessionStore;

/// Build a test `ServerConfig` with safe defaults and the scripted oracle
/// mode.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        oracle: OracleConfig {
            mode: OracleMode::Scripted,
            base_url: "http://127.0.0.1:0".to_string(),
            api_key: String::new(),
            model: "test".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Build the full application router with all middleware layers, wired to
/// the given oracle.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. Also returns the session store so
/// tests can assert on persisted state.
pub fn build_test_app(oracle: Arc<dyn EvidenceOracle>) -> (Router, Arc<SessionStore>) {
    let config = test_config();
    let store = Arc::new(SessionStore::new());

    let state = AppState::new(Arc::clone(&store), oracle, config);

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    (app, store)
}

/// Send a GET request to the app.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Send a POST request with an empty body to the app.
pub async fn post(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Create an assessment session from resume text and return its key.
pub async fn create_session(app: &Router, resume_text: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/assessments",
        serde_json::json!({ "resume_text": resume_text }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["session_id"]
        .as_str()
        .expect("session_id should be a string")
        .to_string()
}

/// Oracle whose bulk assessment and opening succeed (delegating to the
/// scripted oracle) but whose dialogue and rescore calls always fail.
///
/// Lets HTTP-level tests exercise the rule that a failed turn leaves the
/// stored session untouched.
pub struct FailingDialogueOracle {
    inner: ScriptedOracle,
}

impl FailingDialogueOracle {
    pub fn new() -> Self {
        Self {
            inner: ScriptedOracle::new(),
        }
    }
}

#[async_trait]
impl EvidenceOracle for FailingDialogueOracle {
    async fn assess_all(&self, document_text: &str) -> Result<Vec<CriterionVerdict>, OracleError> {
        self.inner.assess_all(document_text).await
    }

    async fn opening(
        &self,
        verdict: &CriterionVerdict,
        document_text: &str,
    ) -> Result<OracleReply, OracleError> {
        self.inner.opening(verdict, document_text).await
    }

    async fn reply(
        &self,
        _verdict: &CriterionVerdict,
        _transcript: &[ChatTurn],
        _user_message: &str,
    ) -> Result<OracleReply, OracleError> {
        Err(OracleError::unavailable("dialogue disabled"))
    }

    async fn rescore(
        &self,
        _verdict: &CriterionVerdict,
        _transcript: &[ChatTurn],
        _document_text: &str,
    ) -> Result<RescoreOutcome, OracleError> {
        Err(OracleError::unavailable("rescore disabled"))
    }
}
