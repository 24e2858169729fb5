// src/models/mod.rs

//! Domain models for the comment pipeline.

mod comment;
mod config;
mod request;

// Re-export all public types
pub use comment::Comment;
pub use config::Config;
pub use request::CommentRequest;

#[cfg(test)]
pub(crate) use comment::sample_comment;
