use std::sync::Arc;

use crate::{
    application::{
        commands::comments::CommentCommandService,
        ports::{moderation::ContentModerator, news::NewsFeed, time::Clock},
        queries::{
            comments::CommentQueryService,
            news::{AggregatorSettings, NewsAggregator, NewsQueryService, NewsSources},
        },
    },
    domain::comment::CommentRepository,
};

/// Reads and writes the gateway exposes, wired once at startup.
pub struct ApplicationServices {
    pub news_queries: Arc<NewsQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
}

/// How the news side of the gateway is configured.
#[derive(Debug, Clone)]
pub struct NewsSettings {
    pub sources: NewsSources,
    pub aggregator: AggregatorSettings,
    pub page_size: u32,
}

impl ApplicationServices {
    pub fn new(
        news_feed: Arc<dyn NewsFeed>,
        news: NewsSettings,
        comment_repo: Arc<dyn CommentRepository>,
        moderator: Arc<dyn ContentModerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let aggregator = NewsAggregator::new(Arc::clone(&news_feed), news.aggregator);
        let news_queries = Arc::new(NewsQueryService::new(
            aggregator,
            Arc::clone(&news_feed),
            news.sources,
            news.page_size,
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&moderator),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));

        Self {
            news_queries,
            comment_commands,
            comment_queries,
        }
    }
}
