// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryCommentRepo, ScriptedFeed, StaticModerator};
use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use news_gateway::application::queries::news::{AggregatorSettings, NewsSources};
use news_gateway::application::services::{ApplicationServices, NewsSettings};
use news_gateway::domain::news::SourceRef;
use news_gateway::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const SOURCE_A: &str = "http://source-a.test/news";
pub const SOURCE_B: &str = "http://source-b.test/news";
pub const DETAILS_SOURCE: &str = "http://details.test/news";

/// Collaborators behind a test router. Keep a handle to inspect calls.
pub struct TestDeps {
    pub feed: Arc<ScriptedFeed>,
    pub repo: Arc<InMemoryCommentRepo>,
    pub moderator: Arc<StaticModerator>,
    pub sources: Vec<&'static str>,
}

impl Default for TestDeps {
    fn default() -> Self {
        Self {
            feed: Arc::new(ScriptedFeed::default()),
            repo: Arc::new(InMemoryCommentRepo::default()),
            moderator: Arc::new(StaticModerator::accepting()),
            sources: vec![SOURCE_A, SOURCE_B],
        }
    }
}

pub fn build_services(deps: &TestDeps) -> Arc<ApplicationServices> {
    let aggregate = deps
        .sources
        .iter()
        .map(|url| SourceRef::parse(url).unwrap())
        .collect();
    let sources = NewsSources::new(
        aggregate,
        Some(SourceRef::parse(DETAILS_SOURCE).unwrap()),
        None,
    )
    .unwrap();

    Arc::new(ApplicationServices::new(
        deps.feed.clone(),
        NewsSettings {
            sources,
            aggregator: AggregatorSettings {
                max_concurrency: 4,
                deadline: Duration::from_secs(2),
            },
            page_size: 10,
        },
        deps.repo.clone(),
        deps.moderator.clone(),
        Arc::new(FixedClock),
    ))
}

pub fn build_test_state(deps: &TestDeps) -> HttpState {
    HttpState {
        services: build_services(deps),
    }
}

pub fn make_test_router(deps: &TestDeps) -> axum::Router {
    build_router(build_test_state(deps), &["*".to_string()])
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
