//! iCalendar PERIOD value type (RFC 5545 §3.3.9).

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use super::duration::SECONDS_PER_DAY;
use super::{ConstructError, Duration, Instant, Value};
use crate::rfc::ical::parse::{ParseError, ParseOptions, ParseResult, parse_interval};

/// What follows the start of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalEnd {
    /// Explicit end, `start/end`.
    End(Instant),
    /// Start plus duration, `start/duration`.
    Duration(Duration),
}

impl fmt::Display for IntervalEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End(end) => write!(f, "{end}"),
            Self::Duration(duration) => write!(f, "{duration}"),
        }
    }
}

/// PERIOD value (RFC 5545 §3.3.9).
///
/// A period of time anchored at `start`, defined by either:
/// - An explicit end instant
/// - A duration
///
/// An end and a duration can never both be stored. A period holding only
/// its start can be built with [`Interval::open`] or [`Interval::from_parts`];
/// the text grammar always needs one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Instant,
    span: Option<IntervalEnd>,
}

impl Interval {
    /// Creates a period from a start and an optional end representation.
    #[must_use]
    pub const fn new(start: Instant, span: Option<IntervalEnd>) -> Self {
        Self { start, span }
    }

    /// Creates an explicit period from start to end.
    #[must_use]
    pub const fn with_end(start: Instant, end: Instant) -> Self {
        Self::new(start, Some(IntervalEnd::End(end)))
    }

    /// Creates a period from a start time and duration.
    #[must_use]
    pub const fn with_duration(start: Instant, duration: Duration) -> Self {
        Self::new(start, Some(IntervalEnd::Duration(duration)))
    }

    /// Creates a period that only has a start.
    #[must_use]
    pub const fn open(start: Instant) -> Self {
        Self::new(start, None)
    }

    /// Assembles a period from values of unchecked type.
    ///
    /// ## Errors
    /// - `MissingStart` if `start` is absent or not an instant
    /// - `ConflictingEndAndDuration` if both `end` and `duration` are given,
    ///   whatever their types
    /// - `InvalidEndType` if `end` is not an instant
    /// - `InvalidDurationType` if `duration` is not a duration
    pub fn from_parts(
        start: Option<Value>,
        end: Option<Value>,
        duration: Option<Value>,
    ) -> Result<Self, ConstructError> {
        let start = match start {
            Some(Value::Instant(instant)) => instant,
            other => {
                return Err(ConstructError::MissingStart {
                    found: other.as_ref().map(Value::value_type),
                });
            }
        };

        let span = match (end, duration) {
            (Some(_), Some(_)) => return Err(ConstructError::ConflictingEndAndDuration),
            (Some(Value::Instant(end)), None) => Some(IntervalEnd::End(end)),
            (Some(other), None) => {
                return Err(ConstructError::InvalidEndType {
                    found: other.value_type(),
                });
            }
            (None, Some(Value::Duration(duration))) => Some(IntervalEnd::Duration(duration)),
            (None, Some(other)) => {
                return Err(ConstructError::InvalidDurationType {
                    found: other.value_type(),
                });
            }
            (None, None) => None,
        };

        Ok(Self { start, span })
    }

    /// Parses `start/end` or `start/duration` in the extended form, leniently.
    ///
    /// ## Errors
    /// - `MalformedInterval` unless the text holds exactly one `/`
    /// - `MalformedInstant` if the start, or an end, is not a valid instant
    /// - `MalformedDuration` if the right-hand side opens with the duration
    ///   sigil but is not a valid duration
    pub fn parse(s: &str) -> ParseResult<Self> {
        Self::parse_with(s, ParseOptions::new())
    }

    /// Parses with explicit options.
    ///
    /// ## Errors
    /// See [`Interval::parse`]; strict options add range failures.
    pub fn parse_with(s: &str, options: ParseOptions) -> ParseResult<Self> {
        parse_interval(s, options)
    }

    /// Returns the start of the period.
    #[must_use]
    pub const fn start(&self) -> &Instant {
        &self.start
    }

    /// Returns the stored end, if the period was given one.
    #[must_use]
    pub const fn end(&self) -> Option<&Instant> {
        match &self.span {
            Some(IntervalEnd::End(end)) => Some(end),
            _ => None,
        }
    }

    /// Returns the stored duration, if the period was given one.
    #[must_use]
    pub const fn duration(&self) -> Option<&Duration> {
        match &self.span {
            Some(IntervalEnd::Duration(duration)) => Some(duration),
            _ => None,
        }
    }

    /// Returns whichever of end or duration is stored.
    #[must_use]
    pub const fn span(&self) -> Option<&IntervalEnd> {
        self.span.as_ref()
    }

    /// Returns the length of the period.
    ///
    /// A stored duration is returned as-is. With a stored end, the two
    /// instants are subtracted on the wall clock and the difference is
    /// decomposed by [`Duration::from_seconds`]; an end before the start
    /// gives a negative duration. A period without either is zero length.
    #[must_use]
    pub fn get_duration(&self) -> Duration {
        match self.span {
            Some(IntervalEnd::Duration(duration)) => duration,
            Some(IntervalEnd::End(end)) => {
                Duration::from_seconds(end.epoch_seconds() - self.start.epoch_seconds())
            }
            None => Duration::zero(),
        }
    }

    /// Returns the instant the period ends at.
    ///
    /// A stored end is returned as-is; otherwise the duration is added to
    /// the start on the wall clock, keeping the start's UTC marker. A DATE
    /// start stays a DATE when the duration is a whole number of days.
    /// Returns `None` for a period without end or duration, or when the
    /// result falls outside years 0 through 9999.
    #[must_use]
    pub fn end_instant(&self) -> Option<Instant> {
        match self.span? {
            IntervalEnd::End(end) => Some(end),
            IntervalEnd::Duration(duration) => {
                let seconds = duration.as_seconds();
                let shifted = self
                    .start
                    .to_naive_datetime()
                    .checked_add_signed(TimeDelta::try_seconds(seconds)?)?;

                if self.start.is_date() && seconds % SECONDS_PER_DAY == 0 {
                    Instant::from_naive_date(shifted.date())
                } else {
                    Instant::from_naive_datetime(shifted, self.start.is_utc())
                }
            }
        }
    }

    /// Returns the iCalendar content-line (basic) form, e.g.
    /// `19970101T180000Z/PT5H30M`.
    #[must_use]
    pub fn to_ical_string(&self) -> String {
        let start = self.start.to_ical_string();
        match self.span {
            Some(IntervalEnd::End(end)) => format!("{start}/{}", end.to_ical_string()),
            Some(IntervalEnd::Duration(duration)) => format!("{start}/{}", duration.to_ical_string()),
            None => start,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{}/{span}", self.start),
            None => write!(f, "{}", self.start),
        }
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
