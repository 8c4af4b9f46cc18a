// tests/support/mocks/moderation.rs
use async_trait::async_trait;
use news_gateway::application::{
    ApplicationResult, RequestContext,
    error::ApplicationError,
    ports::moderation::{ContentModerator, ModerationVerdict},
};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum ModeratorBehaviour {
    Accept,
    Reject(&'static str),
    Unavailable,
}

/// Answers every review the same way and remembers what it was asked.
pub struct StaticModerator {
    behaviour: ModeratorBehaviour,
    reviewed: Mutex<Vec<(String, String)>>,
}

impl StaticModerator {
    pub const fn new(behaviour: ModeratorBehaviour) -> Self {
        Self {
            behaviour,
            reviewed: Mutex::new(Vec::new()),
        }
    }

    pub const fn accepting() -> Self {
        Self::new(ModeratorBehaviour::Accept)
    }

    /// `(request_id, text)` of every review so far.
    pub fn reviewed(&self) -> Vec<(String, String)> {
        self.reviewed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentModerator for StaticModerator {
    async fn review(
        &self,
        ctx: &RequestContext,
        text: &str,
    ) -> ApplicationResult<ModerationVerdict> {
        self.reviewed
            .lock()
            .unwrap()
            .push((ctx.request_id().to_string(), text.to_string()));
        match &self.behaviour {
            ModeratorBehaviour::Accept => Ok(ModerationVerdict::Accepted),
            ModeratorBehaviour::Reject(reason) => Ok(ModerationVerdict::Rejected {
                reason: (*reason).to_string(),
            }),
            ModeratorBehaviour::Unavailable => Err(ApplicationError::infrastructure(
                "moderation service unreachable",
            )),
        }
    }
}
