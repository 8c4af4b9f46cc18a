// src/application/ports/news.rs
use crate::application::{ApplicationResult, RequestContext};
use crate::domain::news::{NewsPage, NewsQuery, SourceRef};
use async_trait::async_trait;

/// One GET against one content source. Implementations do not retry.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    async fn fetch(
        &self,
        ctx: &RequestContext,
        source: &SourceRef,
        query: &NewsQuery,
    ) -> ApplicationResult<NewsPage>;
}
