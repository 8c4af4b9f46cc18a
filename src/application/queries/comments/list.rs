use super::CommentQueryService;
use crate::{
    application::{
        RequestContext,
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::NewsId,
};

pub struct ListCommentsQuery {
    /// Raw `news_id` parameter as received.
    pub news_id: Option<String>,
}

impl CommentQueryService {
    /// Read-through to the store. The id is validated before the store is
    /// touched.
    pub async fn list_by_news(
        &self,
        ctx: &RequestContext,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let news_id = parse_news_id(query.news_id.as_deref())?;
        let comments = self.repo.list_by_news(ctx, news_id).await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}

fn parse_news_id(raw: Option<&str>) -> ApplicationResult<NewsId> {
    let id = raw
        .map(str::trim)
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| ApplicationError::validation("'news_id' parameter is required"))?;
    NewsId::new(id).map_err(|err| ApplicationError::validation(err.to_string()))
}
