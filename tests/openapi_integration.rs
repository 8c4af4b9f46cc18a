use axum::body::Body;
use axum::http::{Method, Request};
use news_gateway::presentation::http::openapi::docs_router;
use tower::ServiceExt; // for oneshot

mod support;

#[tokio::test]
async fn docs_router_serves_the_openapi_document() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);
    let doc = support::body_json(resp).await;
    assert_eq!(doc["info"]["title"], "News Gateway API");
    assert!(doc["paths"]["/news"]["get"].is_object());
    assert!(doc["paths"]["/comments/add"]["post"].is_object());
}

#[tokio::test]
async fn gateway_router_exposes_swagger_ui() {
    let deps = support::TestDeps::default();
    let app = support::make_test_router(&deps);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/docs")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    assert!(status.is_success() || status.is_redirection(), "{status}");
}
