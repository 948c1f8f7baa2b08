use thiserror::Error;

use reqdelta_providers::ProviderError;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Pipeline failure with the failing stage attributed.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Embedding fetch exhausted its retries; without embeddings no
    /// classification is possible, so the run fails here.
    #[error("embedding fetch failed for {side} features: {source}")]
    Embedding {
        side: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("classification failed: {0}")]
    Classification(#[from] reqdelta_core::Error),

    #[error("parse failed: {0}")]
    Parse(#[from] reqdelta_parser::Error),

    #[error("no features extracted from {0}")]
    EmptyDocument(String),

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}
