//! The embedding capability boundary.

use async_trait::async_trait;

use reqdelta_core::Embedding;

use crate::error::{ProviderError, Result};

/// Maps text spans to fixed-dimension vectors.
///
/// Implementations must preserve input order 1:1 in `embed_many` and return
/// vectors of a single, provider-defined dimensionality.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per input in the same order.
    async fn embed_many(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Embed a single text span.
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let mut vectors = self.embed_many(&[text.to_string()]).await?;
        match vectors.len() {
            1 => Ok(vectors.remove(0)),
            n => Err(ProviderError::InvalidResponse(format!(
                "expected 1 embedding, got {n}"
            ))),
        }
    }
}
