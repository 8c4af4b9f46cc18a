// src/presentation/http/middleware/mod.rs
mod request_context;

pub use request_context::request_context;
