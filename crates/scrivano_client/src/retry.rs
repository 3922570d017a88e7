//! Connection-level retry with exponential backoff.

use scrivano_error::RetryableError;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Retry configuration for transport attempts.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (initial call included).
    pub max_attempts: usize,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

/// Retries an operation with exponential backoff.
///
/// Only errors whose [`RetryableError::is_retryable`] returns true are
/// retried; everything else fails on the first attempt. The last error is
/// returned once attempts are exhausted.
#[instrument(skip(config, operation))]
pub async fn retry_with_backoff<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: RetryableError,
{
    let mut attempt = 0;
    let mut backoff = config.initial_backoff;

    loop {
        attempt += 1;
        debug!(attempt, "Executing operation");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() {
                    warn!("Error is not retryable, failing immediately");
                    return Err(err);
                }

                if attempt >= config.max_attempts {
                    warn!(attempt, "All retry attempts exhausted");
                    return Err(err);
                }

                debug!(backoff_ms = backoff.as_millis(), "Retrying after failure");
                sleep(backoff).await;

                // Exponential backoff with cap
                backoff = std::cmp::min(
                    Duration::from_secs_f64(backoff.as_secs_f64() * config.backoff_multiplier),
                    config.max_backoff,
                );
            }
        }
    }
}
