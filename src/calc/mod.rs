//! Calculation Module
//!
//! - [`geo`]: haversine distance
//! - [`dates`]: calendar day arithmetic
//! - [`range`]: integer sequences

pub mod dates;
pub mod geo;
pub mod range;

pub use dates::{add_days, create_period, date_diff, sub_days};
pub use geo::{calculate_distance, radians, Coordinates, EARTH_RADIUS_KM};
pub use range::range;
