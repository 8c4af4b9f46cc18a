mod aggregator;
mod search;
mod service;
mod single_source;

pub use aggregator::{
    AggregatorSettings, DEFAULT_AGGREGATE_TIMEOUT, DEFAULT_MAX_CONCURRENCY, NewsAggregator,
};
pub use search::SearchNewsQuery;
pub use service::{DEFAULT_PAGE_SIZE, NewsQueryService, NewsSources};
pub use single_source::SingleSourceQuery;
