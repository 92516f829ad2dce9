//! Loosely typed property values.

use std::fmt;

use super::{Duration, Instant, Interval};

/// Name of a value type, as used in `VALUE=` parameters (RFC 5545 §3.2.20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    DateTime,
    Duration,
    Period,
    Text,
    Integer,
}

impl ValueType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "DATE-TIME",
            Self::Duration => "DURATION",
            Self::Period => "PERIOD",
            Self::Text => "TEXT",
            Self::Integer => "INTEGER",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value whose type is only known at runtime.
///
/// This is the input of [`Interval::from_parts`], which checks that each
/// part holds the type a PERIOD needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// DATE or DATE-TIME value.
    Instant(Instant),
    /// DURATION value.
    Duration(Duration),
    /// PERIOD value.
    Interval(Interval),
    /// TEXT value (unescaped).
    Text(String),
    /// INTEGER value.
    Integer(i32),
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Instant(_) => ValueType::DateTime,
            Self::Duration(_) => ValueType::Duration,
            Self::Interval(_) => ValueType::Period,
            Self::Text(_) => ValueType::Text,
            Self::Integer(_) => ValueType::Integer,
        }
    }

    /// Returns this value as an instant, if it is one.
    #[must_use]
    pub const fn as_instant(&self) -> Option<&Instant> {
        match self {
            Self::Instant(instant) => Some(instant),
            _ => None,
        }
    }

    /// Returns this value as a duration, if it is one.
    #[must_use]
    pub const fn as_duration(&self) -> Option<&Duration> {
        match self {
            Self::Duration(duration) => Some(duration),
            _ => None,
        }
    }

    /// Returns this value as a period, if it is one.
    #[must_use]
    pub const fn as_interval(&self) -> Option<&Interval> {
        match self {
            Self::Interval(interval) => Some(interval),
            _ => None,
        }
    }

    /// Returns this value as text, if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant(instant) => write!(f, "{instant}"),
            Self::Duration(duration) => write!(f, "{duration}"),
            Self::Interval(interval) => write!(f, "{interval}"),
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<Instant> for Value {
    fn from(value: Instant) -> Self {
        Self::Instant(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<Interval> for Value {
    fn from(value: Interval) -> Self {
        Self::Interval(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
