//! Affinity - LLM-backed compatibility scoring for the Lume dating app
//!
//! Builds a fixed instruction prompt from two user profiles, sends it to an
//! external completion API and strictly validates the JSON it returns into a
//! typed [`CompatibilityResult`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    build_prompt, evaluate_compatibility, parse_compatibility, render_profile,
    CompatibilityError, CompatibilityEvaluator, ProviderError, RetryPolicy, ScoreField,
};
pub use models::{CompatibilityRequest, CompatibilityResult, Profile, ProfileSheet};
pub use services::{HttpLlmClient, HttpLlmOptions, LlmClient};
