// src/infrastructure/http/mod.rs
//! reqwest-backed adapters for the outbound collaborators.
mod client;
mod moderator;
mod news_feed;

pub use client::{DEFAULT_REQUEST_TIMEOUT, build_http_client};
pub use moderator::HttpContentModerator;
pub use news_feed::HttpNewsFeed;

pub(crate) use client::discard_body;
