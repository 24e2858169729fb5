// src/lib.rs

//! eggcorn: accepts comments posted from web pages, publishes them and
//! renders an HTML reply.

pub mod config;
pub mod error;
pub mod escape;
pub mod extract;
pub mod handler;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod publish;
pub mod render;
