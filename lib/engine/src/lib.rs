//! # reqdelta Engine
//!
//! Orchestrates one comparison run end to end:
//!
//! 1. Parse both requirement documents (or accept pre-parsed features)
//! 2. Fetch embeddings for the two sides concurrently, with retry
//! 3. Classify new features against existing ones (deterministic core call)
//! 4. Generate gap analysis for similar pairs under a concurrency bound
//! 5. Generate strategic recommendations
//! 6. Aggregate statistics into an immutable [`ComparisonResult`]
//!
//! A run either produces a complete result (placeholder text standing in for
//! unavailable explanations) or fails with the stage attributed - never a
//! silently partial result.
//!
//! [`ComparisonResult`]: reqdelta_core::ComparisonResult

pub mod config;
pub mod engine;
pub mod error;
pub mod prompts;

pub use config::{EngineConfig, LlmConfig, ReportConfig, RetryConfig};
pub use engine::{best_match, ComparisonEngine};
pub use error::{EngineError, Result};
