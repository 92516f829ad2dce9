//! iCalendar core models (RFC 5545).
//!
//! These types are immutable values. Every construction path checks the
//! invariants, so a live `Interval` never holds both an end and a duration.

mod duration;
mod error;
mod instant;
mod interval;
mod jcal;
mod value;

pub use duration::Duration;
pub use error::ConstructError;
pub use instant::{Instant, Time};
pub use interval::{Interval, IntervalEnd};
pub use value::{Value, ValueType};
