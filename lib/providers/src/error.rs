use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport failure or provider-side outage. Retryable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider is throttling us. Retryable with backoff.
    #[error("rate limited by provider")]
    RateLimited {
        /// Server-suggested wait, when the response carried one
        retry_after: Option<Duration>,
    },

    /// The provider answered but the payload was not usable. Not retryable.
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Whether a retry with backoff can reasonably succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::Unavailable(_) | ProviderError::RateLimited { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classes() {
        assert!(ProviderError::Unavailable("down".into()).is_retryable());
        assert!(ProviderError::RateLimited { retry_after: None }.is_retryable());
        assert!(!ProviderError::InvalidResponse("garbage".into()).is_retryable());
    }
}
