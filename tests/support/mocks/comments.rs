// tests/support/mocks/comments.rs
use async_trait::async_trait;
use news_gateway::application::RequestContext;
use news_gateway::domain::comment::{
    Comment, CommentId, CommentRepository, NewComment, NewsId,
};
use news_gateway::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Keeps comments in memory, counts store calls and records the request id
/// of each call.
#[derive(Default)]
pub struct InMemoryCommentRepo {
    comments: Mutex<Vec<Comment>>,
    saves: AtomicUsize,
    lists: AtomicUsize,
    request_ids: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl InMemoryCommentRepo {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn list_count(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn seen_request_ids(&self) -> Vec<String> {
        self.request_ids.lock().unwrap().clone()
    }

    fn record(&self, ctx: &RequestContext) {
        self.request_ids
            .lock()
            .unwrap()
            .push(ctx.request_id().as_str().to_string());
    }

    pub fn stored(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn save(&self, ctx: &RequestContext, comment: NewComment) -> DomainResult<Comment> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.record(ctx);
        if let Some(message) = &self.fail_with {
            return Err(DomainError::Persistence(message.clone()));
        }
        let mut comments = self.comments.lock().unwrap();
        let id = CommentId::new(i64::try_from(comments.len()).unwrap() + 1)?;
        let stored = comment.into_comment(id);
        comments.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_news(
        &self,
        ctx: &RequestContext,
        news_id: NewsId,
    ) -> DomainResult<Vec<Comment>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.record(ctx);
        if let Some(message) = &self.fail_with {
            return Err(DomainError::Persistence(message.clone()));
        }
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.news_id == news_id)
            .cloned()
            .collect())
    }
}
