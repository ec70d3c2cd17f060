//! Gemini client for video highlight extraction.
//!
//! This crate turns a local video file and a clip style into one
//! `generateContent` request (prompt, inline base64 video, response schema
//! and thinking budget) and parses the reply into [`Clip`] records.
//!
//! [`Clip`]: smartclip_models::Clip

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod schema;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::{GeminiError, GeminiResult};
pub use schema::{response_schema, Schema, SchemaType};
