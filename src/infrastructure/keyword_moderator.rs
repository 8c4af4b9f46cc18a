// src/infrastructure/keyword_moderator.rs
use crate::application::{
    ApplicationResult, RequestContext,
    ports::moderation::{ContentModerator, ModerationVerdict},
};
use async_trait::async_trait;

pub const DEFAULT_FORBIDDEN_WORDS: [&str; 3] = ["qwerty", "йцукен", "zxvbnm"];

/// In-process moderator: rejects text containing any forbidden word,
/// compared case-insensitively as a substring.
#[derive(Debug, Clone)]
pub struct KeywordModerator {
    forbidden: Vec<String>,
}

impl KeywordModerator {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let forbidden = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { forbidden }
    }

    /// Returns the first forbidden word found in `text`, if any.
    pub fn find_forbidden(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.forbidden
            .iter()
            .find(|word| lowered.contains(word.as_str()))
            .map(String::as_str)
    }
}

impl Default for KeywordModerator {
    fn default() -> Self {
        Self::new(DEFAULT_FORBIDDEN_WORDS)
    }
}

#[async_trait]
impl ContentModerator for KeywordModerator {
    async fn review(&self, _ctx: &RequestContext, text: &str) -> ApplicationResult<ModerationVerdict> {
        Ok(self.find_forbidden(text).map_or(ModerationVerdict::Accepted, |word| {
            ModerationVerdict::Rejected {
                reason: format!("text contains forbidden word `{word}`"),
            }
        }))
    }
}
