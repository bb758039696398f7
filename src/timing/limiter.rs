//! Call Limiters
//!
//! Wrappers that control how often a callback runs:
//!
//! - [`Debouncer`]: runs only the last call of a burst, after a quiet period
//! - [`Throttler`]: runs at most once per interval, keeping a trailing call
//! - [`RateLimiter`]: runs at most N times per window, dropping the rest
//!
//! `Debouncer` and `Throttler` defer work onto the tokio runtime, so their
//! `call` must happen inside one.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Window used by [`RateLimiter::per_second`].
const ONE_SECOND: Duration = Duration::from_secs(1);

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Delays a callback until calls stop arriving for `wait`.
///
/// Each [`call`](Self::call) cancels the pending invocation and schedules
/// a new one, so only the last argument of a burst is delivered.
pub struct Debouncer<T> {
    func: Callback<T>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(func: F, wait: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `func(arg)` after the quiet period, replacing any pending call.
    pub fn call(&self, arg: T) {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let func = Arc::clone(&self.func);
        let wait = self.wait;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            func(arg);
        }));
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    /// Returns true while an invocation is scheduled and has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

#[derive(Default)]
struct ThrottleState {
    last_ran: Option<Instant>,
    pending: Option<JoinHandle<()>>,
}

/// Runs a callback at most once per `limit`.
///
/// The first call runs immediately. Calls inside the interval replace a
/// single trailing invocation, which fires when the interval has elapsed
/// since the last run.
pub struct Throttler<T> {
    func: Callback<T>,
    limit: Duration,
    state: Arc<Mutex<ThrottleState>>,
}

impl<T: Send + 'static> Throttler<T> {
    pub fn new<F>(func: F, limit: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            limit,
            state: Arc::new(Mutex::new(ThrottleState::default())),
        }
    }

    pub fn call(&self, arg: T) {
        let mut state = self.state.lock();
        let last_ran = state.last_ran;

        let Some(last_ran) = last_ran else {
            state.last_ran = Some(Instant::now());
            drop(state);
            (self.func)(arg);
            return;
        };

        if let Some(handle) = state.pending.take() {
            handle.abort();
        }

        let delay = self.limit.saturating_sub(last_ran.elapsed());
        let func = Arc::clone(&self.func);
        let shared = Arc::clone(&self.state);
        let limit = self.limit;

        debug!("Throttled call deferred by {:?}", delay);
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let due = {
                let mut state = shared.lock();
                match state.last_ran {
                    Some(last) if last.elapsed() >= limit => {
                        state.last_ran = Some(Instant::now());
                        true
                    }
                    _ => false,
                }
            };

            if due {
                func(arg);
            }
        }));
    }

    /// Drops the trailing invocation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.state.lock().pending.take() {
            handle.abort();
        }
    }
}

struct Window {
    opened: Option<Instant>,
    calls: u32,
}

/// Runs a callback at most `times` per window and drops the excess.
///
/// A window opens on the first call and is replaced by a new one when a
/// call arrives after it has lasted its full length.
pub struct RateLimiter<T> {
    func: Box<dyn Fn(T) + Send + Sync>,
    times: u32,
    length: Duration,
    window: Mutex<Window>,
}

impl<T> RateLimiter<T> {
    pub fn new<F>(func: F, times: u32, length: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            times,
            length,
            window: Mutex::new(Window {
                opened: None,
                calls: 0,
            }),
        }
    }

    /// Allows `times` calls per second.
    pub fn per_second<F>(func: F, times: u32) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::new(func, times, ONE_SECOND)
    }

    /// Runs `func(arg)` if the current window has quota left.
    ///
    /// Returns whether the callback ran.
    pub fn call(&self, arg: T) -> bool {
        let now = Instant::now();

        let allowed = {
            let mut window = self.window.lock();
            let expired = window
                .opened
                .map_or(true, |opened| now.duration_since(opened) >= self.length);
            if expired {
                window.opened = Some(now);
                window.calls = 0;
            }

            if window.calls < self.times {
                window.calls += 1;
                true
            } else {
                false
            }
        };

        if allowed {
            (self.func)(arg);
        } else {
            debug!("Rate limit of {} per {:?} reached, call dropped", self.times, self.length);
        }
        allowed
    }
}
