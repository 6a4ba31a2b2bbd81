use std::{future::Future, time::Duration};

use dioxus_logger::tracing;

use crate::server::error::ai::AiError;

/// Bounded exponential backoff settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled for each attempt after that.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }
}

/// Runs `operation` until it succeeds, fails with a non-transient error, or the
/// policy runs out of attempts.
///
/// No sleep happens after the final attempt.
pub async fn with_backoff<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, AiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AiError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(attempt, "AI request succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) if err.is_transient() && attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "AI request failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
        }
    }

    #[test]
    fn delay_doubles_per_attempt() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.delay_after(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_after(3), Duration::from_millis(4000));
    }

    #[tokio::test]
    async fn retries_transient_errors_up_to_max_attempts() {
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result: Result<(), AiError> = with_backoff(&fast_policy(3), || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AiError::Timeout)
        })
        .await;

        assert_eq!(result, Err(AiError::Timeout));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn stops_retrying_once_operation_succeeds() {
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result = with_backoff(&fast_policy(5), || async move {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            if call < 2 {
                Err(AiError::RateLimit)
            } else {
                Ok(call)
            }
        })
        .await;

        assert_eq!(result, Ok(2));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn never_retries_non_transient_errors() {
        for error in [
            AiError::Authentication,
            AiError::SchemaValidation("bad shape".into()),
            AiError::Configuration("no key".into()),
        ] {
            let counter = AtomicU32::new(0);
            let calls = &counter;

            let result: Result<(), AiError> = with_backoff(&fast_policy(3), || {
                let error = error.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(error)
                }
            })
            .await;

            assert_eq!(result, Err(error));
            assert_eq!(counter.load(Ordering::SeqCst), 1);
        }
    }
}
