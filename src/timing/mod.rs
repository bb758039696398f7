//! Timing Module
//!
//! Measuring and pacing work.
//!
//! # Components
//!
//! - [`ExecutionTime`]: stopwatch with overtime warnings
//! - [`wait`]: busy and async waits, with optional jitter
//! - [`limiter`]: debounce, throttle and per-window rate limiting

pub mod execution;
pub mod limiter;
pub mod wait;

pub use execution::{Clock, ExecutionTime, MonotonicClock, TimerError, TimerState, DEFAULT_THRESHOLD};
pub use limiter::{Debouncer, RateLimiter, Throttler};
pub use wait::{busy_wait, jitter_busy_wait, jitter_duration, jitter_sleep, WaitError, DEFAULT_AMPLITUDE};
