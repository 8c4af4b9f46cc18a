use super::error::map_sqlx;
use crate::application::RequestContext;
use crate::domain::comment::{
    Comment, CommentAuthor, CommentBody, CommentId, CommentRepository, NewComment, NewsId,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    author: String,
    text: String,
    news_id: i64,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id)?,
            author: CommentAuthor::new(row.author)?,
            body: CommentBody::new(row.text)?,
            news_id: NewsId::new(row.news_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn save(&self, _ctx: &RequestContext, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (author, text, news_id, parent_id, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id, author, text, news_id, parent_id, created_at",
        )
        .bind(comment.author.as_str())
        .bind(comment.body.as_str())
        .bind(i64::from(comment.news_id))
        .bind(comment.parent_id.map(i64::from))
        .bind(comment.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_by_news(
        &self,
        _ctx: &RequestContext,
        news_id: NewsId,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, author, text, news_id, parent_id, created_at FROM comments WHERE news_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(news_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
