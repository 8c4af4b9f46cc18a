use crate::application::RequestContext;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::NewsId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persists the comment and returns it with its store-assigned id.
    async fn save(&self, ctx: &RequestContext, comment: NewComment) -> DomainResult<Comment>;
    async fn list_by_news(
        &self,
        ctx: &RequestContext,
        news_id: NewsId,
    ) -> DomainResult<Vec<Comment>>;
}
