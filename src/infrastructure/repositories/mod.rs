// src/infrastructure/repositories/mod.rs
mod error;
mod remote_comment;
mod sqlite_comment;

pub use remote_comment::HttpCommentRepository;
pub use sqlite_comment::SqliteCommentRepository;
