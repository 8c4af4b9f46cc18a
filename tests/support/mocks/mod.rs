// tests/support/mocks/mod.rs
pub mod comments;
pub mod moderation;
pub mod news;
pub mod time;

pub use comments::*;
pub use moderation::*;
pub use news::*;
pub use time::*;
