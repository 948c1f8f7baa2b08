//! # reqdelta Providers
//!
//! External capability boundaries for the comparison pipeline.
//!
//! The core engine treats "turn text into a vector" and "write some prose
//! about these two features" as pluggable capabilities:
//!
//! - [`EmbeddingProvider`] - batch text-to-vector, order preserving
//! - [`TextGenerator`] - prompt-to-text for gap analysis and recommendations
//! - [`OpenAiClient`] - both capabilities over any OpenAI-compatible HTTP API
//! - [`RetryPolicy`] - bounded exponential backoff with jitter for the
//!   retryable failure classes
//!
//! Any backend that satisfies the traits works; the engine never depends on
//! a specific vendor.

pub mod embedder;
pub mod error;
pub mod generator;
pub mod openai;
pub mod retry;

pub use embedder::EmbeddingProvider;
pub use error::{ProviderError, Result};
pub use generator::TextGenerator;
pub use openai::{OpenAiClient, OpenAiConfig};
pub use retry::RetryPolicy;
