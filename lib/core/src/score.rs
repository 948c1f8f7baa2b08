//! Similarity scoring between feature embeddings.
//!
//! Cosine similarity rescaled from [-1, 1] to [0, 1]. The rescale keeps the
//! downstream threshold bands anchored to a fixed numeric range regardless
//! of the embedding provider's raw output distribution.

use crate::embedding::Embedding;
use crate::error::{Error, Result};

/// Compute the normalized similarity between two embeddings.
///
/// Returns a score in [0, 1] where 1.0 means identical meaning and 0.0 means
/// opposite meaning. Unrelated text lands near 0.5 under the rescale.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] when the vectors differ in length
/// - [`Error::DegenerateVector`] when either vector has zero magnitude
pub fn cosine_score(a: &Embedding, b: &Embedding) -> Result<f32> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch {
            expected: a.dim(),
            actual: b.dim(),
        });
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
        return Err(Error::DegenerateVector);
    }

    // Clamp guards against rounding drift pushing the ratio past +/-1
    let raw = (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0);

    Ok((raw + 1.0) / 2.0)
}
