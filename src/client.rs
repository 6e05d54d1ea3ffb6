//! Fetch seam for the user-metrics response, with bounded retry.
//!
//! The classifiers themselves are pure; everything fallible lives behind
//! [`MetricsSource`]. Retry is an explicit loop with the attempt counter
//! held by value, so an abandoned caller just drops the future instead of
//! leaving a scheduled callback behind.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time;

use crate::metrics::UserMetricsResponse;
use crate::{log_error, log_warn};

const ENABLE_LOGS: bool = true;

/// Anything that can produce a user-metrics response: an HTTP client,
/// a local cache, a fixture in tests.
#[allow(async_fn_in_trait)]
pub trait MetricsSource {
    async fn fetch_user_metrics(&self) -> Result<UserMetricsResponse>;
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt, so `3` means up to 4 attempts.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub initial_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
        }
    }
}

/// Fetch the metrics response, sleeping 1s, 2s, 4s (by default) between
/// attempts. The last error is propagated once the attempt budget is spent.
pub async fn fetch_with_retry<S: MetricsSource>(
    source: &S,
    config: &RetryConfig,
) -> Result<UserMetricsResponse> {
    let mut attempt: u32 = 0;
    let mut delay = config.initial_delay;

    loop {
        match source.fetch_user_metrics().await {
            Ok(response) => return Ok(response),
            Err(err) if attempt < config.max_retries => {
                attempt += 1;
                log_warn!(
                    "metrics fetch attempt {} failed, retrying in {:?}: {:#}",
                    attempt,
                    delay,
                    err
                );
                time::sleep(delay).await;
                delay *= 2;
            }
            Err(err) => {
                log_error!("metrics fetch giving up after {} attempts", attempt + 1);
                return Err(err).with_context(|| {
                    format!("metrics fetch failed after {} attempts", attempt + 1)
                });
            }
        }
    }
}
