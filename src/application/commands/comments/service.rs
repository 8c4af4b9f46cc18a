use std::sync::Arc;

use crate::{
    application::ports::{moderation::ContentModerator, time::Clock},
    domain::comment::CommentRepository,
};

pub struct CommentCommandService {
    pub(super) repo: Arc<dyn CommentRepository>,
    pub(super) moderator: Arc<dyn ContentModerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        repo: Arc<dyn CommentRepository>,
        moderator: Arc<dyn ContentModerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            moderator,
            clock,
        }
    }
}
