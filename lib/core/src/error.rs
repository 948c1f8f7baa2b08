use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("cannot score a zero-magnitude embedding")]
    DegenerateVector,

    #[error("{side} side has {features} features but {embeddings} embeddings")]
    EmbeddingCount {
        side: &'static str,
        features: usize,
        embeddings: usize,
    },

    #[error("scoring failed for pair (new: {new_id}, existing: {existing_id}): {source}")]
    Scoring {
        new_id: String,
        existing_id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("invalid comparison config: {0}")]
    InvalidConfig(String),
}
