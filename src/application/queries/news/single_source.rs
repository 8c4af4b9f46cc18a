use super::NewsQueryService;
use crate::{
    application::{ApplicationResult, RequestContext, dto::NewsFeedDto},
    domain::news::SourceRef,
};

pub struct SingleSourceQuery {
    pub search: Option<String>,
    pub page: Option<String>,
}

impl NewsQueryService {
    pub async fn news_details(
        &self,
        ctx: &RequestContext,
        query: SingleSourceQuery,
    ) -> ApplicationResult<NewsFeedDto> {
        let source = self.sources.details().clone();
        self.read_single(ctx, &source, query).await
    }

    pub async fn filtered_news(
        &self,
        ctx: &RequestContext,
        query: SingleSourceQuery,
    ) -> ApplicationResult<NewsFeedDto> {
        let source = self.sources.filter().clone();
        self.read_single(ctx, &source, query).await
    }

    async fn read_single(
        &self,
        ctx: &RequestContext,
        source: &SourceRef,
        query: SingleSourceQuery,
    ) -> ApplicationResult<NewsFeedDto> {
        let query = self.build_query(query.search.as_deref(), query.page.as_deref())?;
        let page = self.feed.fetch(ctx, source, &query).await?;
        Ok(NewsFeedDto::new(ctx, page))
    }
}
