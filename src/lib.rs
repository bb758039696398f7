//! Stopclock - Execution Stopwatch and Helpers
//!
//! A stopwatch for timing spans of work, plus a set of small independent
//! helpers for formatting, pacing and parsing.
//!
//! # Architecture
//!
//! The library is organized into four modules:
//!
//! - [`timing`]: Execution stopwatch, waits with jitter, call limiters
//! - [`format`]: Durations, phone numbers, thousands separators, text
//! - [`calc`]: Geodesic distance, date arithmetic, ranges
//! - [`parse`]: URL query parameters and email validation
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use stopclock::ExecutionTime;
//! use stopclock::format::format_ms_to_hms;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut timer = ExecutionTime::new();
//!     let report = format_ms_to_hms(3_723_000);
//!     timer.stop()?;
//!
//!     assert_eq!(report, "01:02:03");
//!     if timer.is_over_time(Duration::from_secs(5)) {
//!         eprintln!("{}", timer);
//!     }
//!     Ok(())
//! }
//! ```

pub mod calc;
pub mod format;
pub mod parse;
pub mod timing;

// Re-export commonly used types
pub use timing::execution::{ExecutionTime, TimerError, TimerState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Stopclock";
