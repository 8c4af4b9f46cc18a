use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub author: String,
    pub text: String,
    pub news_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            author: comment.author.into_inner(),
            text: comment.body.into_inner(),
            news_id: comment.news_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            created_at: comment.created_at,
        }
    }
}
