// src/application/ports/mod.rs
pub mod moderation;
pub mod news;
pub mod time;
