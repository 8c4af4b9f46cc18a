// src/application/commands/comments/submit.rs
use super::CommentCommandService;
use crate::{
    application::{
        RequestContext,
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::moderation::ModerationVerdict,
    },
    domain::comment::{CommentAuthor, CommentBody, CommentId, NewComment, NewsId},
};
use tracing::info;

pub struct SubmitCommentCommand {
    pub author: String,
    pub text: String,
    pub news_id: i64,
    pub parent_id: Option<i64>,
}

impl SubmitCommentCommand {
    pub fn builder() -> SubmitCommentCommandBuilder {
        SubmitCommentCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct SubmitCommentCommandBuilder {
    author: Option<String>,
    text: Option<String>,
    news_id: Option<i64>,
    parent_id: Option<i64>,
}

impl SubmitCommentCommandBuilder {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub const fn news_id(mut self, news_id: i64) -> Self {
        self.news_id = Some(news_id);
        self
    }

    pub const fn parent_id(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn build(self) -> Result<SubmitCommentCommand, &'static str> {
        Ok(SubmitCommentCommand {
            author: self.author.ok_or("author is required")?,
            text: self.text.ok_or("text is required")?,
            news_id: self.news_id.ok_or("news_id is required")?,
            parent_id: self.parent_id,
        })
    }
}

impl CommentCommandService {
    /// Moderate, then persist. A rejected comment is never handed to the
    /// store; a moderation service that cannot be reached fails the
    /// submission as an infrastructure error.
    pub async fn submit_comment(
        &self,
        ctx: &RequestContext,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let created_at = self.clock.now();

        let author = CommentAuthor::new(command.author)?;
        let body = CommentBody::new(command.text)?;
        let news_id = NewsId::new(command.news_id)?;
        let parent_id = command.parent_id.map(CommentId::new).transpose()?;

        match self.moderator.review(ctx, body.as_str()).await? {
            ModerationVerdict::Accepted => {}
            ModerationVerdict::Rejected { reason } => {
                info!(
                    request_id = %ctx.request_id(),
                    news_id = %news_id,
                    reason = %reason,
                    "comment rejected by moderation"
                );
                return Err(ApplicationError::moderation_rejected(reason));
            }
        }

        let stored = self
            .repo
            .save(ctx, NewComment {
                author,
                body,
                news_id,
                parent_id,
                created_at,
            })
            .await?;

        info!(
            request_id = %ctx.request_id(),
            comment_id = i64::from(stored.id),
            news_id = %stored.news_id,
            "comment stored"
        );
        Ok(stored.into())
    }
}
