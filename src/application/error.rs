// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    /// Content policy violation reported by the moderation service.
    #[error("comment rejected: {0}")]
    ModerationRejected(String),

    /// A leaf call (news source, moderation service) failed: transport error,
    /// bad status or undecodable payload.
    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("upstream timed out: {0}")]
    UpstreamTimeout(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn moderation_rejected(msg: impl Into<String>) -> Self {
        Self::ModerationRejected(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn upstream_timeout(msg: impl Into<String>) -> Self {
        Self::UpstreamTimeout(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True when the caller's input is at fault rather than a dependency.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::ModerationRejected(_) | Self::Domain(DomainError::Validation(_))
        )
    }
}
