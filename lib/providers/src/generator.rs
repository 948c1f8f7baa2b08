//! The text-generation capability boundary.

use async_trait::async_trait;

use crate::error::Result;

/// Turns a prompt into free text.
///
/// The engine builds gap-analysis and recommendation prompts on top of this;
/// any synchronous or asynchronous text-generation backend can satisfy it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`, optionally under a system instruction.
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String>;
}
