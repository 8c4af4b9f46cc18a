// tests/support/mocks/news.rs
use async_trait::async_trait;
use news_gateway::application::{
    ApplicationResult, RequestContext, error::ApplicationError, ports::news::NewsFeed,
};
use news_gateway::domain::news::{Article, NewsPage, NewsQuery, PageInfo, SourceRef};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum FeedReply {
    Page { titles: Vec<&'static str>, total_pages: u32 },
    Fail(&'static str),
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCall {
    pub source: String,
    pub request_id: String,
    pub title: String,
    pub page: u32,
    pub page_size: u32,
}

/// Replies per source URL; sources without a script answer an empty page.
#[derive(Default)]
pub struct ScriptedFeed {
    replies: HashMap<String, FeedReply>,
    calls: Mutex<Vec<FeedCall>>,
}

impl ScriptedFeed {
    pub fn new(replies: Vec<(&str, FeedReply)>) -> Self {
        Self {
            replies: replies
                .into_iter()
                .map(|(url, reply)| (url.to_string(), reply))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<FeedCall> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        author: "Reporter".into(),
        published: "2024-03-15".into(),
        content: format!("{title} body"),
    }
}

#[async_trait]
impl NewsFeed for ScriptedFeed {
    async fn fetch(
        &self,
        ctx: &RequestContext,
        source: &SourceRef,
        query: &NewsQuery,
    ) -> ApplicationResult<NewsPage> {
        let url = source.as_url().as_str().to_string();
        self.calls.lock().unwrap().push(FeedCall {
            source: url.clone(),
            request_id: ctx.request_id().to_string(),
            title: query.title().to_string(),
            page: query.page(),
            page_size: query.page_size(),
        });

        match self.replies.get(&url) {
            None => Ok(NewsPage::new(Vec::new(), PageInfo::new(query.page(), 0))),
            Some(FeedReply::Page {
                titles,
                total_pages,
            }) => Ok(NewsPage::new(
                titles.iter().map(|title| article(title)).collect(),
                PageInfo::new(query.page(), *total_pages),
            )),
            Some(FeedReply::Fail(message)) => Err(ApplicationError::upstream(format!("{url}: {message}"))),
            Some(FeedReply::TimedOut) => Err(ApplicationError::upstream_timeout(url)),
        }
    }
}
