//! Timeout bound for remote collaborators
//!
//! The browser build sleeps on `gloo-timers`, native builds on tokio.

use futures::future::{self, Either};
use std::future::Future;
use std::time::Duration;

use crate::shared::errors::{AppError, Result};

#[cfg(target_arch = "wasm32")]
fn sleep(duration: Duration) -> impl Future<Output = ()> {
    gloo_timers::future::sleep(duration)
}

#[cfg(not(target_arch = "wasm32"))]
fn sleep(duration: Duration) -> impl Future<Output = ()> {
    tokio::time::sleep(duration)
}

/// Whole milliseconds of `limit`, saturating at `u64::MAX`
fn limit_millis(limit: Duration) -> u64 {
    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)
}

/// Resolve `future` or fail with `AppError::Timeout` once `limit` has elapsed
pub async fn with_timeout<F: Future>(future: F, limit: Duration) -> Result<F::Output> {
    let timer = sleep(limit);
    futures::pin_mut!(future);
    futures::pin_mut!(timer);

    match future::select(future, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(AppError::Timeout(limit_millis(limit))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_before_limit() {
        let result = with_timeout(async { 42 }, Duration::from_millis(50)).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_limit_millis_saturates() {
        assert_eq!(limit_millis(Duration::from_millis(5_000)), 5_000);
        assert_eq!(limit_millis(Duration::from_secs(u64::MAX)), u64::MAX);
    }

    #[tokio::test]
    async fn test_times_out() {
        let result = with_timeout(future::pending::<()>(), Duration::from_millis(10)).await;
        assert!(matches!(result, Err(AppError::Timeout(10))));
    }
}
