//! iCalendar value types for periods of time (RFC 5545).
//!
//! - `core`: the `Instant`, `Duration` and `Interval` models and their text forms
//! - `parse`: parsers for the extended (`1997-01-01T18:00:00Z`) and basic
//!   (`19970101T180000Z`) text forms
//!
//! ## Example
//!
//! ```rust
//! use sandglass_rfc::rfc::ical::core::{Duration, Interval};
//!
//! let period = Interval::parse("1997-01-01T18:30:20Z/1997-01-02T07:00:00Z").unwrap();
//! assert_eq!(period.get_duration(), Duration::hms(12, 29, 40));
//! assert_eq!(period.to_string(), "1997-01-01T18:30:20Z/1997-01-02T07:00:00Z");
//! ```

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used items at module level
pub use core::{ConstructError, Duration, Instant, Interval, IntervalEnd, Value, ValueType};
pub use parse::{ParseError, ParseErrorKind, ParseOptions, ParseResult, Strictness, ValueFormat};
