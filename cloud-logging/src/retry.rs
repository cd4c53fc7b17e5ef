//! Exponential backoff for retried RPCs.
//!
//! Each retried call runs under a [`RetryPolicy`]. Attempts are repeated while
//! they fail with a transient status and the next backoff still fits within
//! the policy deadline. Every attempt is given the time remaining until that
//! deadline as its own timeout.
use crate::error::{Code, Error, Result};
use crate::internal_logging::logging_warn;
use std::future::Future;
use std::time::{Duration, SystemTime};
use tokio::time::{sleep, Instant};

/// The status codes retried by default: `DEADLINE_EXCEEDED`, `INTERNAL` and
/// `UNAVAILABLE`. Every other code is permanent.
pub const TRANSIENT_CODES: [Code; 3] = [Code::DeadlineExceeded, Code::Internal, Code::Unavailable];

/// Whether a status code is worth retrying.
pub fn is_transient(code: Code) -> bool {
    TRANSIENT_CODES.contains(&code)
}

/// Backoff parameters for a retried RPC.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Factor applied to the delay after each retry.
    pub multiplier: f64,
    /// Upper bound for a single delay.
    pub max_delay: Duration,
    /// Overall time budget, measured from the first attempt.
    pub deadline: Duration,
}

impl RetryPolicy {
    /// Policy used by the logging, sink, exclusion and metric RPCs:
    /// 100ms initial delay, multiplier 1.3, at most 60s between attempts and a
    /// 60s deadline.
    pub const fn standard() -> Self {
        RetryPolicy {
            initial_delay: Duration::from_millis(100),
            multiplier: 1.3,
            max_delay: Duration::from_secs(60),
            deadline: Duration::from_secs(60),
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

// Generates a pseudo random jitter value up to max_jitter
fn generate_jitter(max_jitter: u64) -> u64 {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    nanos as u64 % (max_jitter + 1)
}

// Sleeps between half and all of the nominal delay
fn jittered(delay: Duration) -> Duration {
    let half = delay.as_millis() as u64 / 2;
    Duration::from_millis(half + generate_jitter(half))
}

/// Runs `operation` until it succeeds, fails permanently, or the policy
/// deadline leaves no room for another attempt.
///
/// `operation` receives the time left before the deadline and should use it as
/// the timeout of that attempt.
pub(crate) async fn retry_with_backoff<F, Fut, T>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T>
where
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let mut attempts: u32 = 0;
    let mut delay = policy.initial_delay;

    loop {
        attempts += 1;
        let remaining = policy.deadline.saturating_sub(start.elapsed());
        let err = match operation(remaining).await {
            Ok(result) => return Ok(result),
            Err(err) => err,
        };
        if !err.is_transient() {
            return Err(err);
        }

        let elapsed = start.elapsed();
        // An attempt that ran into the overall deadline reports the timeout itself.
        if elapsed >= policy.deadline && err.code() == Some(Code::DeadlineExceeded) {
            return Err(err);
        }
        let pause = jittered(delay);
        if elapsed + pause >= policy.deadline {
            return Err(Error::RetryExhausted {
                attempts,
                deadline: policy.deadline,
                source: Box::new(err),
            });
        }

        logging_warn!(
            name: "Rpc.Retry",
            operation = operation_name,
            attempt = attempts,
            delay_ms = pause.as_millis() as u64,
            reason = format!("{err}"),
        );
        sleep(pause).await;
        delay = delay.mul_f64(policy.multiplier).min(policy.max_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast_policy(deadline_ms: u64) -> RetryPolicy {
        RetryPolicy::standard()
            .with_initial_delay(Duration::from_millis(2))
            .with_max_delay(Duration::from_millis(4))
            .with_deadline(Duration::from_millis(deadline_ms))
    }

    #[test]
    fn generate_jitter_stays_in_range() {
        let jitter = generate_jitter(100);
        assert!(jitter <= 100);
        assert_eq!(generate_jitter(0), 0);
    }

    #[test]
    fn transient_codes_are_fixed() {
        assert!(is_transient(Code::Unavailable));
        assert!(is_transient(Code::Internal));
        assert!(is_transient(Code::DeadlineExceeded));
        assert!(!is_transient(Code::ResourceExhausted));
        assert!(!is_transient(Code::InvalidArgument));
    }

    #[tokio::test]
    async fn succeeds_once_after_transient_failures() {
        let attempts = AtomicUsize::new(0);
        let successes = AtomicUsize::new(0);

        let result = retry_with_backoff(&fast_policy(5_000), "test_operation", |_| {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            let successes = &successes;
            async move {
                if attempt < 3 {
                    Err(Error::status(Code::Unavailable, "try again"))
                } else {
                    successes.fetch_add(1, Ordering::SeqCst);
                    Ok("written")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "written");
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        assert_eq!(successes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn permanent_errors_are_not_retried() {
        let attempts = AtomicUsize::new(0);

        let result: Result<()> = retry_with_backoff(&fast_policy(5_000), "test_operation", |_| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::status(Code::PermissionDenied, "no")) }
        })
        .await;

        assert_eq!(result.unwrap_err().code(), Some(Code::PermissionDenied));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn gives_up_at_the_deadline() {
        let attempts = AtomicUsize::new(0);

        let result: Result<()> = retry_with_backoff(&fast_policy(40), "test_operation", |_| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::status(Code::Internal, "still broken")) }
        })
        .await;

        match result {
            Err(Error::RetryExhausted {
                attempts: reported,
                deadline,
                source,
            }) => {
                assert_eq!(deadline, Duration::from_millis(40));
                assert_eq!(reported as usize, attempts.load(Ordering::SeqCst));
                assert!(reported > 1);
                assert_eq!(source.code(), Some(Code::Internal));
            }
            other => panic!("expected retry exhaustion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn attempts_get_the_remaining_budget() {
        let budgets = std::sync::Mutex::new(Vec::new());

        let _ = retry_with_backoff(&fast_policy(1_000), "test_operation", |remaining| {
            let mut seen = budgets.lock().unwrap();
            seen.push(remaining);
            let fail = seen.len() < 3;
            async move {
                if fail {
                    Err(Error::status(Code::Unavailable, "again"))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        let seen = budgets.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen[0] <= Duration::from_secs(1));
        assert!(seen[2] < seen[0]);
    }

    #[tokio::test]
    async fn timed_out_attempt_at_deadline_is_reported_as_such() {
        let result: Result<()> = retry_with_backoff(&fast_policy(20), "test_operation", |remaining| async move {
            sleep(remaining).await;
            Err(Error::status(Code::DeadlineExceeded, "attempt timed out"))
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Rpc(_)));
        assert_eq!(err.code(), Some(Code::DeadlineExceeded));
    }
}
