pub mod database;
pub mod http;
pub mod keyword_moderator;
pub mod repositories;
pub mod time;
