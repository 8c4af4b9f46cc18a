// src/infrastructure/http/news_feed.rs
use super::client::discard_body;
use crate::application::{
    ApplicationResult, RequestContext, context::REQUEST_ID_HEADER, error::ApplicationError,
    ports::news::NewsFeed,
};
use crate::domain::news::{Article, NewsPage, NewsQuery, PageInfo, SourceRef};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Upstream client: `GET {source}?title=&page=&pageSize=` answering
/// `{news: [...], pagination: {...}}`.
#[derive(Clone)]
pub struct HttpNewsFeed {
    client: Client,
}

impl HttpNewsFeed {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    news: Vec<ArticlePayload>,
    pagination: PaginationPayload,
}

#[derive(Debug, Deserialize)]
struct ArticlePayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    published: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct PaginationPayload {
    current_page: u32,
    total_pages: u32,
}

impl From<NewsEnvelope> for NewsPage {
    fn from(envelope: NewsEnvelope) -> Self {
        let articles = envelope
            .news
            .into_iter()
            .map(|item| Article {
                title: item.title,
                author: item.author,
                published: item.published,
                content: item.content,
            })
            .collect();
        Self::new(
            articles,
            PageInfo::new(
                envelope.pagination.current_page,
                envelope.pagination.total_pages,
            ),
        )
    }
}

fn upstream_error(source: &SourceRef, err: &reqwest::Error) -> ApplicationError {
    if err.is_timeout() {
        ApplicationError::upstream_timeout(format!("{source}: {err}"))
    } else {
        ApplicationError::upstream(format!("{source}: {err}"))
    }
}

#[async_trait]
impl NewsFeed for HttpNewsFeed {
    async fn fetch(
        &self,
        ctx: &RequestContext,
        source: &SourceRef,
        query: &NewsQuery,
    ) -> ApplicationResult<NewsPage> {
        let page = query.page().to_string();
        let page_size = query.page_size().to_string();

        let response = self
            .client
            .get(source.as_url().clone())
            .header(REQUEST_ID_HEADER, ctx.request_id().as_str())
            .query(&[
                ("title", query.title()),
                ("page", page.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|err| upstream_error(source, &err))?;

        let status = response.status();
        if !status.is_success() {
            discard_body(response).await;
            return Err(ApplicationError::upstream(format!(
                "{source} responded with status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| upstream_error(source, &err))?;
        let envelope: NewsEnvelope = serde_json::from_slice(&body).map_err(|err| {
            ApplicationError::upstream(format!("{source} returned an undecodable body: {err}"))
        })?;

        debug!(
            request_id = %ctx.request_id(),
            %source,
            articles = envelope.news.len(),
            "news source answered"
        );
        Ok(envelope.into())
    }
}
