//! Bounded retry with exponential backoff and jitter.
//!
//! Only the retryable failure classes ([`ProviderError::is_retryable`]) are
//! retried; a malformed response fails immediately.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::error::{ProviderError, Result};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts including the first
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds, fails non-retryably, or attempts exhaust.
    pub async fn run<T, F, Fut>(&self, op_name: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0u32;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt + 1 < self.max_attempts => {
                    let delay = self.delay_for(attempt, &err);
                    warn!(
                        op = op_name,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying after backoff"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Exponential delay with full jitter, honoring a server retry-after hint
    /// when one was given.
    fn delay_for(&self, attempt: u32, err: &ProviderError) -> Duration {
        if let ProviderError::RateLimited {
            retry_after: Some(hint),
        } = err
        {
            return (*hint).min(self.max_delay);
        }

        let exp = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay);
        let millis = exp.as_millis().max(1) as u64;
        Duration::from_millis(rand::rng().random_range(millis / 2..=millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = fast_policy()
            .run("op", || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(ProviderError::Unavailable("transient".into()))
                    } else {
                        Ok(42)
                    }
                }
            })
            .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_fails_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = fast_policy()
            .run("op", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(ProviderError::InvalidResponse("garbage".into())) }
            })
            .await;
        assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhausted_attempts_surface_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = fast_policy()
            .run("op", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(ProviderError::RateLimited { retry_after: None }) }
            })
            .await;
        assert!(matches!(result, Err(ProviderError::RateLimited { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_retry_after_hint_is_honored_and_capped() {
        let policy = fast_policy();
        let err = ProviderError::RateLimited {
            retry_after: Some(Duration::from_secs(60)),
        };
        assert_eq!(policy.delay_for(0, &err), policy.max_delay);
    }
}
