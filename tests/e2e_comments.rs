use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;

use support::{InMemoryCommentRepo, ModeratorBehaviour, StaticModerator, TestDeps};

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-request-id", "comment-req")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn deps_with_moderator(behaviour: ModeratorBehaviour) -> TestDeps {
    TestDeps {
        moderator: Arc::new(StaticModerator::new(behaviour)),
        ..TestDeps::default()
    }
}

#[tokio::test]
async fn accepted_comment_returns_201_and_is_listed() {
    let deps = TestDeps::default();

    let body = serde_json::json!({ "author": "John", "text": "Hello, world!", "news_id": 1 }).to_string();
    let resp = support::make_test_router(&deps)
        .oneshot(post_json("/comments/add", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = support::body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["author"], "John");
    assert_eq!(created["text"], "Hello, world!");
    assert_eq!(created["news_id"], 1);
    assert_eq!(created["created_at"], "2024-03-15T09:30:00Z");
    assert!(created.get("parent_id").is_none());
    assert_eq!(
        deps.moderator.reviewed(),
        vec![("comment-req".to_string(), "Hello, world!".to_string())]
    );

    let resp = support::make_test_router(&deps)
        .oneshot(get("/comments/get?news_id=1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = support::body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["text"], "Hello, world!");
}

#[tokio::test]
async fn forbidden_comment_returns_403_and_is_not_stored() {
    let deps = deps_with_moderator(ModeratorBehaviour::Reject("Forbidden content in comment"));

    let body = serde_json::json!({ "author": "John", "text": "zxvbnm", "news_id": 1 }).to_string();
    let resp = support::make_test_router(&deps)
        .oneshot(post_json("/comments/add", &body))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
    assert_eq!(deps.repo.save_count(), 0);
}

#[tokio::test]
async fn unreachable_moderation_returns_500() {
    let deps = deps_with_moderator(ModeratorBehaviour::Unavailable);

    let body = serde_json::json!({ "author": "John", "text": "fine", "news_id": 1 }).to_string();
    let resp = support::make_test_router(&deps)
        .oneshot(post_json("/comments/add", &body))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
    assert_eq!(deps.repo.save_count(), 0);
}

#[tokio::test]
async fn malformed_body_is_a_json_400() {
    let deps = TestDeps::default();

    for body in [
        "{not json",
        r#"{"author":"John","news_id":1}"#,
        r#"{"author":"John","text":"hi","news_id":"one"}"#,
    ] {
        let resp = support::make_test_router(&deps)
            .oneshot(post_json("/comments/add", body))
            .await
            .unwrap();
        support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    }
    assert!(deps.moderator.reviewed().is_empty());
}

#[tokio::test]
async fn blank_text_is_a_400() {
    let deps = TestDeps::default();

    let body = serde_json::json!({ "author": "John", "text": "  ", "news_id": 1 }).to_string();
    let resp = support::make_test_router(&deps)
        .oneshot(post_json("/comments/add", &body))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(deps.moderator.reviewed().is_empty());
}

#[tokio::test]
async fn listing_requires_a_numeric_news_id() {
    let deps = TestDeps::default();

    for uri in ["/comments/get", "/comments/get?news_id=abc"] {
        let resp = support::make_test_router(&deps).oneshot(get(uri)).await.unwrap();
        support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    }
    assert_eq!(deps.repo.list_count(), 0);
}

#[tokio::test]
async fn store_failure_on_listing_returns_500() {
    let deps = TestDeps {
        repo: Arc::new(InMemoryCommentRepo::failing("database is locked")),
        ..TestDeps::default()
    };

    let resp = support::make_test_router(&deps)
        .oneshot(get("/comments/get?news_id=1"))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
}

#[tokio::test]
async fn inbound_request_id_reaches_the_comment_store() {
    let deps = TestDeps::default();

    let body = serde_json::json!({ "author": "John", "text": "Hello", "news_id": 2 }).to_string();
    let resp = support::make_test_router(&deps)
        .oneshot(post_json("/comments/add", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let list = Request::builder()
        .method(Method::GET)
        .uri("/comments/get?news_id=2")
        .header("x-request-id", "list-req")
        .body(Body::empty())
        .unwrap();
    let resp = support::make_test_router(&deps).oneshot(list).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(deps.repo.seen_request_ids(), vec!["comment-req", "list-req"]);
}
