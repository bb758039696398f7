//! Busy and Async Waiting
//!
//! Fixed and jittered waits. Busy variants spin on the monotonic clock
//! and block the calling thread; async variants sleep on the tokio timer.

use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use thiserror::Error;

/// Default jitter amplitude (±30%).
pub const DEFAULT_AMPLITUDE: f64 = 0.3;

/// Errors raised when configuring a jittered wait.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WaitError {
    #[error("Amplitude must be between 0 and 1, got {0}")]
    InvalidAmplitude(f64),
}

/// Spins until `duration` has passed.
pub fn busy_wait(duration: Duration) {
    let start = Instant::now();
    while start.elapsed() < duration {
        std::hint::spin_loop();
    }
}

/// Sleeps for `duration` without blocking the runtime.
pub async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Picks a random duration in `[base * (1 - amplitude), base * (1 + amplitude)]`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use stopclock::timing::jitter_duration;
///
/// let jittered = jitter_duration(Duration::from_millis(100), 0.5).unwrap();
/// assert!(jittered >= Duration::from_millis(50));
/// assert!(jittered <= Duration::from_millis(150));
///
/// assert!(jitter_duration(Duration::from_millis(100), 1.5).is_err());
/// ```
pub fn jitter_duration(base: Duration, amplitude: f64) -> Result<Duration, WaitError> {
    if !(0.0..=1.0).contains(&amplitude) {
        return Err(WaitError::InvalidAmplitude(amplitude));
    }

    let factor = rand::thread_rng().gen_range((1.0 - amplitude)..=(1.0 + amplitude));
    let jittered = Duration::try_from_secs_f64(base.as_secs_f64() * factor).unwrap_or(Duration::MAX);

    debug!(
        "Jittered {:?} by factor {:.3} to {:?}",
        base, factor, jittered
    );
    Ok(jittered)
}

/// Busy-waits for a jittered duration and returns how long it waited.
pub fn jitter_busy_wait(base: Duration, amplitude: f64) -> Result<Duration, WaitError> {
    let duration = jitter_duration(base, amplitude)?;
    busy_wait(duration);
    Ok(duration)
}

/// Sleeps for a jittered duration and returns how long it slept.
pub async fn jitter_sleep(base: Duration, amplitude: f64) -> Result<Duration, WaitError> {
    let duration = jitter_duration(base, amplitude)?;
    wait(duration).await;
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_wait_blocks_for_duration() {
        let start = Instant::now();
        busy_wait(Duration::from_millis(30));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_busy_wait_zero_returns() {
        busy_wait(Duration::ZERO);
    }

    #[test]
    fn test_jitter_within_bounds() {
        let base = Duration::from_millis(1000);
        for _ in 0..200 {
            let jittered = jitter_duration(base, DEFAULT_AMPLITUDE).unwrap();
            assert!(jittered >= Duration::from_millis(699));
            assert!(jittered <= Duration::from_millis(1301));
        }
    }

    #[test]
    fn test_zero_amplitude_is_exact() {
        let base = Duration::from_millis(250);
        let jittered = jitter_duration(base, 0.0).unwrap();
        assert_eq!(jittered.as_millis(), 250);
    }

    #[test]
    fn test_invalid_amplitude_rejected() {
        let base = Duration::from_millis(10);
        assert_eq!(jitter_duration(base, -0.1), Err(WaitError::InvalidAmplitude(-0.1)));
        assert_eq!(jitter_duration(base, 1.01), Err(WaitError::InvalidAmplitude(1.01)));
        assert!(jitter_duration(base, f64::NAN).is_err());
        assert!(jitter_busy_wait(base, 2.0).is_err());
    }

    #[test]
    fn test_full_amplitude_allowed() {
        let base = Duration::from_millis(10);
        let jittered = jitter_duration(base, 1.0).unwrap();
        assert!(jittered <= Duration::from_millis(20));
    }

    #[test]
    fn test_jitter_busy_wait_reports_duration() {
        let start = Instant::now();
        let waited = jitter_busy_wait(Duration::from_millis(20), 0.5).unwrap();
        assert!(start.elapsed() >= waited);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_advances_timer() {
        let start = tokio::time::Instant::now();
        wait(Duration::from_secs(5)).await;
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_jitter_sleep_reports_duration() {
        let start = tokio::time::Instant::now();
        let slept = jitter_sleep(Duration::from_secs(2), DEFAULT_AMPLITUDE).await.unwrap();
        assert!(start.elapsed() >= slept);
        assert!(slept >= Duration::from_millis(1399));
    }

    #[tokio::test]
    async fn test_jitter_sleep_invalid_amplitude() {
        let result = jitter_sleep(Duration::from_millis(1), -1.0).await;
        assert!(matches!(result, Err(WaitError::InvalidAmplitude(_))));
    }
}
