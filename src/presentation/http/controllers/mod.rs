// src/presentation/http/controllers/mod.rs
pub mod censor;
pub mod comments;
pub mod news;
