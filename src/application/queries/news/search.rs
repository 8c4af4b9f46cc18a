use super::NewsQueryService;
use crate::application::{ApplicationResult, RequestContext, dto::NewsFeedDto};

pub struct SearchNewsQuery {
    pub search: Option<String>,
    pub page: Option<String>,
}

impl NewsQueryService {
    /// Aggregated read across every configured source.
    pub async fn search_news(
        &self,
        ctx: &RequestContext,
        query: SearchNewsQuery,
    ) -> ApplicationResult<NewsFeedDto> {
        let query = self.build_query(query.search.as_deref(), query.page.as_deref())?;
        let page = self
            .aggregator
            .fetch_all(ctx, self.sources.aggregate(), &query)
            .await?;
        Ok(NewsFeedDto::new(ctx, page))
    }
}
