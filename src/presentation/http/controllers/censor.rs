// src/presentation/http/controllers/censor.rs
//! Handler of the stand-alone censorship service.
use crate::application::{
    RequestContext,
    ports::moderation::{ContentModerator, ModerationVerdict},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Ctx;
use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CensorRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CensorResponse {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub async fn censor(
    Extension(moderator): Extension<Arc<dyn ContentModerator>>,
    Ctx(ctx): Ctx,
    payload: Result<Json<CensorRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<CensorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| HttpError::from_json_rejection(&rejection))?;
    review(moderator.as_ref(), &ctx, &payload.text).await
}

async fn review(
    moderator: &dyn ContentModerator,
    ctx: &RequestContext,
    text: &str,
) -> HttpResult<(StatusCode, Json<CensorResponse>)> {
    let verdict = moderator.review(ctx, text).await.into_http()?;
    Ok(match verdict {
        ModerationVerdict::Accepted => (
            StatusCode::OK,
            Json(CensorResponse {
                allowed: true,
                reason: None,
            }),
        ),
        ModerationVerdict::Rejected { reason } => (
            StatusCode::BAD_REQUEST,
            Json(CensorResponse {
                allowed: false,
                reason: Some(reason),
            }),
        ),
    })
}
