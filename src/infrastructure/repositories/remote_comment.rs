use super::error::map_reqwest;
use crate::application::RequestContext;
use crate::application::context::REQUEST_ID_HEADER;
use crate::domain::comment::{
    Comment, CommentAuthor, CommentBody, CommentId, CommentRepository, NewComment, NewsId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::http::discard_body;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;

/// Comment store living behind another HTTP service.
///
/// `POST {base}/comments/add` stores a comment and answers with it;
/// `GET {base}/comments/get?news_id=` lists a news item's comments.
/// Both calls carry the caller's `X-Request-ID`.
#[derive(Clone)]
pub struct HttpCommentRepository {
    client: Client,
    add_url: Url,
    list_url: Url,
}

impl HttpCommentRepository {
    pub fn new(client: Client, base: &Url) -> DomainResult<Self> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let join = |path: &str| {
            base.join(path)
                .map_err(|err| DomainError::Persistence(format!("invalid comment service url: {err}")))
        };
        Ok(Self {
            add_url: join("comments/add")?,
            list_url: join("comments/get")?,
            client,
        })
    }
}

#[derive(Serialize)]
struct NewCommentPayload<'a> {
    author: &'a str,
    text: &'a str,
    news_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct CommentPayload {
    id: i64,
    author: String,
    text: String,
    news_id: i64,
    #[serde(default)]
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentPayload> for Comment {
    type Error = DomainError;

    fn try_from(payload: CommentPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(payload.id)?,
            author: CommentAuthor::new(payload.author)?,
            body: CommentBody::new(payload.text)?,
            news_id: NewsId::new(payload.news_id)?,
            parent_id: payload.parent_id.map(CommentId::new).transpose()?,
            created_at: payload.created_at,
        })
    }
}

async fn ensure_success(response: Response, url: &Url) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    discard_body(response).await;
    Err(DomainError::Persistence(format!(
        "comment service {url} answered {status}"
    )))
}

fn decode<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> DomainResult<T> {
    serde_json::from_slice(bytes)
        .map_err(|err| DomainError::Persistence(format!("comment service body: {err}")))
}

#[async_trait]
impl CommentRepository for HttpCommentRepository {
    async fn save(&self, ctx: &RequestContext, comment: NewComment) -> DomainResult<Comment> {
        let payload = NewCommentPayload {
            author: comment.author.as_str(),
            text: comment.body.as_str(),
            news_id: comment.news_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            created_at: comment.created_at,
        };

        let response = self
            .client
            .post(self.add_url.clone())
            .header(REQUEST_ID_HEADER, ctx.request_id().as_str())
            .json(&payload)
            .send()
            .await
            .map_err(|err| map_reqwest(&err))?;
        let response = ensure_success(response, &self.add_url).await?;
        let bytes = response.bytes().await.map_err(|err| map_reqwest(&err))?;

        Comment::try_from(decode::<CommentPayload>(&bytes)?)
    }

    async fn list_by_news(
        &self,
        ctx: &RequestContext,
        news_id: NewsId,
    ) -> DomainResult<Vec<Comment>> {
        let response = self
            .client
            .get(self.list_url.clone())
            .header(REQUEST_ID_HEADER, ctx.request_id().as_str())
            .query(&[("news_id", i64::from(news_id))])
            .send()
            .await
            .map_err(|err| map_reqwest(&err))?;
        let response = ensure_success(response, &self.list_url).await?;
        let bytes = response.bytes().await.map_err(|err| map_reqwest(&err))?;

        decode::<Vec<CommentPayload>>(&bytes)?
            .into_iter()
            .map(Comment::try_from)
            .collect()
    }
}
