// src/infrastructure/http/moderator.rs
use super::client::discard_body;
use crate::application::{
    ApplicationResult, RequestContext,
    context::REQUEST_ID_HEADER,
    error::ApplicationError,
    ports::moderation::{ContentModerator, ModerationVerdict},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

/// Moderation client: `POST {endpoint}` with `{"text": ...}`.
///
/// 2xx means accepted, 400 means the text violates the content policy.
/// Any other status, and any transport failure, means moderation could not
/// be performed.
#[derive(Clone)]
pub struct HttpContentModerator {
    client: Client,
    endpoint: Url,
}

impl HttpContentModerator {
    pub const fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[derive(Serialize)]
struct ModerationRequest<'a> {
    text: &'a str,
}

#[async_trait]
impl ContentModerator for HttpContentModerator {
    async fn review(&self, ctx: &RequestContext, text: &str) -> ApplicationResult<ModerationVerdict> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(REQUEST_ID_HEADER, ctx.request_id().as_str())
            .json(&ModerationRequest { text })
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ApplicationError::upstream_timeout(format!("moderation service: {err}"))
                } else {
                    ApplicationError::upstream(format!("moderation service: {err}"))
                }
            })?;

        let status = response.status();
        discard_body(response).await;

        if status.is_success() {
            Ok(ModerationVerdict::Accepted)
        } else if status == StatusCode::BAD_REQUEST {
            Ok(ModerationVerdict::Rejected {
                reason: "Forbidden content in comment".into(),
            })
        } else {
            Err(ApplicationError::upstream(format!(
                "moderation service responded with status {status}"
            )))
        }
    }
}
