//! Execution Stopwatch
//!
//! Measures how long a caller-delimited span of work takes and warns
//! when it runs past a threshold.
//!
//! Time is read from a [`Clock`], which defaults to the process-wide
//! monotonic clock. Warnings go to an injectable sink, which defaults to
//! the `log` facade.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

/// Name reported in overtime warnings.
const COMPONENT: &str = "ExecutionTime";

/// Threshold used by [`ExecutionTime::is_over_default`].
pub const DEFAULT_THRESHOLD: Duration = Duration::from_secs(1);

/// Receives overtime warnings.
pub type WarnSink = Box<dyn Fn(&str) + Send + Sync>;

/// Errors raised by invalid stopwatch transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("Timer has already started. Please stop the timer before starting it again.")]
    AlreadyStarted,
    #[error("Timer has not been started. Please start the timer before stopping it.")]
    NotStarted,
}

/// Source of monotonic timestamps.
///
/// Returned values are offsets from an arbitrary fixed epoch and must
/// never decrease between calls.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Lifecycle state of an [`ExecutionTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Created through [`ExecutionTime::idle`] or [`ExecutionTime::reset`]
    Idle,
    /// Start recorded, no end yet
    Running,
    /// Start and end recorded
    Stopped,
}

/// Stopwatch for a single span of work.
///
/// [`ExecutionTime::new`] starts measuring immediately. Call
/// [`stop`](Self::stop) to freeze the elapsed time, or keep querying a
/// running timer to read the time spent so far.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use stopclock::timing::ExecutionTime;
///
/// let mut timer = ExecutionTime::new();
/// // ... work ...
/// timer.stop().unwrap();
///
/// assert!(!timer.is_over_time(Duration::from_secs(60)));
/// assert!(timer.to_string().starts_with("Total execution time in seconds: "));
/// ```
pub struct ExecutionTime<C: Clock = MonotonicClock> {
    clock: C,
    start_time: Option<Duration>,
    end_time: Option<Duration>,
    sink: WarnSink,
}

impl ExecutionTime<MonotonicClock> {
    /// Creates a running timer on the monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }

    /// Creates a timer that waits for an explicit [`start`](Self::start).
    pub fn idle() -> Self {
        Self::idle_with_clock(MonotonicClock::new())
    }
}

impl Default for ExecutionTime<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ExecutionTime<C> {
    /// Creates a running timer reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        let mut timer = Self::idle_with_clock(clock);
        timer.start_time = Some(timer.clock.now());
        timer
    }

    /// Creates an idle timer reading time from `clock`.
    pub fn idle_with_clock(clock: C) -> Self {
        Self {
            clock,
            start_time: None,
            end_time: None,
            sink: Box::new(|message| warn!("{}", message)),
        }
    }

    /// Replaces the overtime warning sink.
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.sink = Box::new(sink);
        self
    }

    /// Records the start time.
    ///
    /// Fails with [`TimerError::AlreadyStarted`] unless the timer is idle.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.start_time.is_some() {
            return Err(TimerError::AlreadyStarted);
        }

        self.start_time = Some(self.clock.now());
        Ok(())
    }

    /// Records the end time.
    ///
    /// Fails with [`TimerError::NotStarted`] on an idle timer. Stopping an
    /// already stopped timer keeps the first end time.
    pub fn stop(&mut self) -> Result<(), TimerError> {
        let Some(start) = self.start_time else {
            return Err(TimerError::NotStarted);
        };

        if self.end_time.is_some() {
            debug!("{}::stop called on a stopped timer, keeping first end time", COMPONENT);
            return Ok(());
        }

        self.end_time = Some(self.clock.now().max(start));
        Ok(())
    }

    /// Returns the timer to the idle state.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.end_time = None;
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> TimerState {
        match (self.start_time, self.end_time) {
            (None, _) => TimerState::Idle,
            (Some(_), None) => TimerState::Running,
            (Some(_), Some(_)) => TimerState::Stopped,
        }
    }

    /// Time between start and stop, or between start and now while running.
    ///
    /// An idle timer reports zero.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (None, _) => Duration::ZERO,
            (Some(start), Some(end)) => end.saturating_sub(start),
            (Some(start), None) => self.clock.now().saturating_sub(start),
        }
    }

    /// Returns true and emits a warning when the elapsed time exceeds
    /// `threshold`. Elapsed time equal to the threshold is not overtime.
    pub fn is_over_time(&self, threshold: Duration) -> bool {
        let elapsed = self.elapsed();
        if elapsed <= threshold {
            return false;
        }

        (self.sink)(&format!("{}::is_over_time: {}", COMPONENT, describe(elapsed)));
        true
    }

    /// [`is_over_time`](Self::is_over_time) with a threshold in fractional
    /// seconds. Negative or NaN thresholds count as zero.
    pub fn is_over_time_secs(&self, seconds: f64) -> bool {
        let threshold = match Duration::try_from_secs_f64(seconds) {
            Ok(threshold) => threshold,
            Err(_) if seconds > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        };
        self.is_over_time(threshold)
    }

    /// [`is_over_time`](Self::is_over_time) against [`DEFAULT_THRESHOLD`].
    pub fn is_over_default(&self) -> bool {
        self.is_over_time(DEFAULT_THRESHOLD)
    }
}

impl<C: Clock> fmt::Display for ExecutionTime<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self.elapsed()))
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for ExecutionTime<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionTime")
            .field("clock", &self.clock)
            .field("start_time", &self.start_time)
            .field("end_time", &self.end_time)
            .finish_non_exhaustive()
    }
}

fn describe(elapsed: Duration) -> String {
    format!("Total execution time in seconds: {:.3}", elapsed.as_secs_f64())
}
