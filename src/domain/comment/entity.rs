// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentAuthor, CommentBody, CommentId, NewsId};
use chrono::{DateTime, Utc};

/// A comment as held by the store. `parent_id` points at another comment
/// of the same news item; it is a reference, not ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub author: CommentAuthor,
    pub body: CommentBody,
    pub news_id: NewsId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: CommentAuthor,
    pub body: CommentBody,
    pub news_id: NewsId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            author: self.author,
            body: self.body,
            news_id: self.news_id,
            parent_id: self.parent_id,
            created_at: self.created_at,
        }
    }
}
