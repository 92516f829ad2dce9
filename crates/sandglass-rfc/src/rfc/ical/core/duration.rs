//! iCalendar DURATION value type (RFC 5545 §3.3.6).

use std::fmt;
use std::str::FromStr;

use crate::rfc::ical::parse::{ParseError, ParseResult, ValueField, parse_duration};

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub(crate) const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Duration value (RFC 5545 §3.3.6).
///
/// Represents a signed duration of time. iCalendar durations can be either:
/// - Week-based: `P1W` (1 week)
/// - Day/time-based: `P1DT2H30M` (1 day, 2 hours, 30 minutes)
///
/// Note: iCalendar does not support year/month designators in durations
/// because months have variable lengths.
///
/// Equality is structural: `P1W` and `P7D` span the same time but are
/// different values. Compare [`Duration::as_seconds`] to compare spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Whether this duration is negative.
    pub negative: bool,
    /// Number of weeks.
    pub weeks: u32,
    /// Number of days.
    pub days: u32,
    /// Number of hours.
    pub hours: u32,
    /// Number of minutes.
    pub minutes: u32,
    /// Number of seconds.
    pub seconds: u32,
}

impl Duration {
    /// Creates a new zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Creates a duration from weeks.
    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self {
            weeks,
            ..Self::zero()
        }
    }

    /// Creates a duration from days.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::zero()
        }
    }

    /// Creates a duration from hours, minutes and seconds.
    #[must_use]
    pub const fn hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            ..Self::zero()
        }
    }

    /// Decomposes a signed number of seconds, largest unit first.
    ///
    /// A non-zero span that is a whole number of weeks becomes `PnW`; any
    /// other span is split into days, hours, minutes and seconds.
    ///
    /// The result is lossy beyond `u32::MAX` weeks or days: the count
    /// saturates, so [`Duration::as_seconds`] no longer returns `total`.
    /// Spans between instants in years 0 through 9999 never get there.
    #[must_use]
    pub fn from_seconds(total: i64) -> Self {
        let negative = total < 0;
        let magnitude = total.unsigned_abs();
        let week = SECONDS_PER_WEEK.unsigned_abs();
        let day = SECONDS_PER_DAY.unsigned_abs();
        let hour = SECONDS_PER_HOUR.unsigned_abs();
        let minute = SECONDS_PER_MINUTE.unsigned_abs();

        if magnitude != 0 && magnitude % week == 0 {
            return Self {
                negative,
                weeks: saturate(magnitude / week),
                ..Self::zero()
            };
        }

        Self {
            negative,
            weeks: 0,
            days: saturate(magnitude / day),
            hours: saturate(magnitude % day / hour),
            minutes: saturate(magnitude % hour / minute),
            seconds: saturate(magnitude % minute),
        }
    }

    /// Parses the canonical text form, e.g. `-P1DT2H` or `P3W`.
    ///
    /// ## Errors
    /// Returns a `MalformedDuration` error if the text does not follow the
    /// DURATION grammar.
    pub fn parse(s: &str) -> ParseResult<Self> {
        parse_duration(s, ValueField::Value, 1)
    }

    /// Returns whether this duration is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns whether every magnitude is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.weeks == 0 && self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Returns whether this is a week-based duration.
    #[must_use]
    pub const fn is_week_based(&self) -> bool {
        self.weeks > 0 && self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Negates this duration.
    #[must_use]
    pub const fn negate(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// Returns the total duration as signed seconds.
    #[must_use]
    pub fn as_seconds(&self) -> i64 {
        let total = i64::from(self.weeks) * SECONDS_PER_WEEK
            + i64::from(self.days) * SECONDS_PER_DAY
            + i64::from(self.hours) * SECONDS_PER_HOUR
            + i64::from(self.minutes) * SECONDS_PER_MINUTE
            + i64::from(self.seconds);

        if self.negative { -total } else { total }
    }

    /// Returns the iCalendar content-line form, which for durations is the
    /// canonical form.
    #[must_use]
    pub fn to_ical_string(&self) -> String {
        self.to_string()
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        if self.is_week_based() {
            return write!(f, "{}W", self.weeks);
        }

        // Weeks mixed with other units have no text form of their own.
        let days = u64::from(self.days) + 7 * u64::from(self.weeks);
        if days > 0 {
            write!(f, "{days}D")?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
