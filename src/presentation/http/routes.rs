// src/presentation/http/routes.rs
use crate::application::{RequestContext, ports::moderation::ContentModerator};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{censor, comments, news},
    middleware::request_context,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::Request,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
};
use std::{sync::Arc, time::Duration};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Span, info_span, warn};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/news", get(news::list_news))
        .route("/news/details", get(news::news_details))
        .route("/news/filter", get(news::filter_news))
        .route("/comments/get", get(comments::list_comments))
        .route("/comments/add", post(comments::add_comment))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(from_fn(request_context))
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// Router of the stand-alone censorship service.
pub fn build_censor_router(moderator: Arc<dyn ContentModerator>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/censor", post(censor::censor))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(from_fn(request_context))
        .layer(Extension(moderator))
}

fn request_span(req: &Request) -> Span {
    let request_id = req
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.request_id().to_string())
        .unwrap_or_default();
    info_span!(
        "http_request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
    )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
