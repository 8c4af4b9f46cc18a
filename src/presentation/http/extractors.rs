// src/presentation/http/extractors.rs
use crate::application::{RequestContext, error::ApplicationError};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// The per-call context installed by the request-context middleware.
#[derive(Debug, Clone)]
pub struct Ctx(pub RequestContext);

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "request context missing",
                ))
            })
    }
}
