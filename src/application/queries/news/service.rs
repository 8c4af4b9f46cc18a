use std::sync::Arc;

use super::aggregator::NewsAggregator;
use crate::{
    application::{ApplicationResult, error::ApplicationError, ports::news::NewsFeed},
    domain::news::{NewsQuery, SourceRef},
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Which sources back which read.
#[derive(Debug, Clone)]
pub struct NewsSources {
    aggregate: Vec<SourceRef>,
    details: SourceRef,
    filter: SourceRef,
}

impl NewsSources {
    /// `details` and `filter` fall back to the first aggregated source.
    pub fn new(
        aggregate: Vec<SourceRef>,
        details: Option<SourceRef>,
        filter: Option<SourceRef>,
    ) -> ApplicationResult<Self> {
        let first = aggregate
            .first()
            .cloned()
            .ok_or_else(|| ApplicationError::infrastructure("at least one news source is required"))?;
        Ok(Self {
            details: details.unwrap_or_else(|| first.clone()),
            filter: filter.unwrap_or(first),
            aggregate,
        })
    }

    pub fn aggregate(&self) -> &[SourceRef] {
        &self.aggregate
    }

    pub const fn details(&self) -> &SourceRef {
        &self.details
    }

    pub const fn filter(&self) -> &SourceRef {
        &self.filter
    }
}

pub struct NewsQueryService {
    pub(super) aggregator: NewsAggregator,
    pub(super) feed: Arc<dyn NewsFeed>,
    pub(super) sources: NewsSources,
    pub(super) page_size: u32,
}

impl NewsQueryService {
    pub fn new(
        aggregator: NewsAggregator,
        feed: Arc<dyn NewsFeed>,
        sources: NewsSources,
        page_size: u32,
    ) -> Self {
        Self {
            aggregator,
            feed,
            sources,
            page_size,
        }
    }

    /// Turns raw `search` / `page` parameters into an upstream query.
    pub(super) fn build_query(
        &self,
        search: Option<&str>,
        page: Option<&str>,
    ) -> ApplicationResult<NewsQuery> {
        let page = page
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| ApplicationError::validation("Invalid or missing page number"))?
            .parse::<u32>()
            .map_err(|_| ApplicationError::validation("Invalid or missing page number"))?;

        Ok(NewsQuery::new(search.unwrap_or_default(), page, self.page_size)?)
    }
}
