// src/application/ports/moderation.rs
use crate::application::{ApplicationResult, RequestContext};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationVerdict {
    Accepted,
    Rejected { reason: String },
}

/// Content policy check run before a comment is persisted. An `Err` means the
/// check itself could not be performed; a policy violation is `Ok(Rejected)`.
#[async_trait]
pub trait ContentModerator: Send + Sync {
    async fn review(&self, ctx: &RequestContext, text: &str) -> ApplicationResult<ModerationVerdict>;
}
