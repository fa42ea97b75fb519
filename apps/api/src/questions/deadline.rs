//! Deadline Governor — bounds the generation call by a wall-clock budget.
//!
//! `tokio::time::timeout` polls the call and a timer together; whichever is
//! ready first decides the outcome. On expiry the call's future is dropped,
//! so a late upstream response is never observed and can never reach the
//! store. The timer is dropped with it on either path.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::questions::GenerationError;

pub async fn with_deadline<F, T>(budget: Duration, call: F) -> Result<T, GenerationError>
where
    F: Future<Output = Result<T, GenerationError>>,
{
    match tokio::time::timeout(budget, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Generation call abandoned after {}ms", budget.as_millis());
            Err(GenerationError::GenerationTimedOut(budget))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    const BUDGET: Duration = Duration::from_secs(40);

    #[tokio::test(start_paused = true)]
    async fn test_slow_call_times_out_at_budget() {
        let started = Instant::now();
        let result: Result<String, _> = with_deadline(BUDGET, async {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok("too late".to_string())
        })
        .await;

        let elapsed = started.elapsed();
        assert!(matches!(result, Err(GenerationError::GenerationTimedOut(b)) if b == BUDGET));
        assert!(elapsed >= BUDGET);
        assert!(elapsed < BUDGET + Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_completion_is_never_observed() {
        let completed = Arc::new(AtomicBool::new(false));
        let flag = completed.clone();

        let result: Result<(), _> = with_deadline(BUDGET, async move {
            tokio::time::sleep(BUDGET * 2).await;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        })
        .await;
        assert!(result.is_err());

        tokio::time::sleep(BUDGET * 3).await;
        assert!(!completed.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_call_passes_through() {
        let result = with_deadline(BUDGET, async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok::<_, GenerationError>(5)
        })
        .await;
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_call_error_is_not_masked_as_timeout() {
        let result: Result<(), _> = with_deadline(BUDGET, async {
            Err(GenerationError::UpstreamEmptyResponse)
        })
        .await;
        assert!(matches!(result, Err(GenerationError::UpstreamEmptyResponse)));
    }
}
