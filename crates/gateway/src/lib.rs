//! Client library for the hosted multimodal AI gateway.
//!
//! Provides gateway configuration, the chat-completions wire types, an
//! HTTP client built on [`reqwest`], and the [`generation::generate`] entry
//! point that enhances a prompt and performs the single outbound call.

pub mod client;
pub mod config;
pub mod error;
pub mod generation;
pub mod messages;
