//! Retry with exponential backoff.

use std::future::Future;
use std::time::Duration;

use crate::error::AfiszError;

/// Retry policy configuration.
///
/// Backoff is deterministic: attempt `n` sleeps
/// `initial_backoff * multiplier^n` before the next try.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1000),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Backoff to sleep after the given zero-based attempt fails.
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_secs_f64(
            self.initial_backoff.as_secs_f64() * self.multiplier.powi(attempt as i32),
        )
    }

    /// Execute an async operation with retry.
    ///
    /// Only errors for which [`AfiszError::is_retryable`] holds re-enter the
    /// loop; anything else is returned on the spot.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, AfiszError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AfiszError>>,
    {
        let mut last_error = None;

        for attempt in 0..self.max_attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if !e.is_retryable() || attempt + 1 >= self.max_attempts {
                        return Err(e);
                    }

                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying after transient error"
                    );
                    tokio::time::sleep(delay).await;

                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(AfiszError::Timeout(0)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::error::AfiszError;

    #[test]
    fn default_backoff_doubles_from_one_second() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(0), Duration::from_secs(1));
        assert_eq!(policy.backoff(1), Duration::from_secs(2));
        assert_eq!(policy.backoff(2), Duration::from_secs(4));
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result: Result<(), _> = policy
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AfiszError::Api {
                    status: 400,
                    message: "bad request".into(),
                })
            })
            .await;

        assert!(matches!(result, Err(AfiszError::Api { status: 400, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transient_errors_exhaust_all_attempts() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1),
            multiplier: 2.0,
        };

        let result: Result<(), _> = policy
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AfiszError::Upstream {
                    status: 500,
                    message: "boom".into(),
                })
            })
            .await;

        assert!(matches!(result, Err(AfiszError::Upstream { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn recovers_when_a_later_attempt_succeeds() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1),
            multiplier: 2.0,
        };

        let result = policy
            .execute(|| async {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n < 1 {
                    Err(AfiszError::Timeout(50))
                } else {
                    Ok(42u32)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
