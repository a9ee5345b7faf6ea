//! psychotech - Explain psychology concepts through everyday technology
//!
//! Builds a prompt from a fixed catalog of familiar technologies (smartphones,
//! browsers, social media, ...), asks an LLM provider for one analogy, and
//! keeps the results of a session newest first. Supports multiple LLM
//! providers (Anthropic, OpenAI, Gemini, OpenAI-compatible servers).

pub mod analogy;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod llm;
pub mod platform;
pub mod render;
pub mod util;
