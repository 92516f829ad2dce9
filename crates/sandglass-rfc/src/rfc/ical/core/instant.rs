//! iCalendar DATE and DATE-TIME values (RFC 5545 §3.3.4, §3.3.5).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

use super::duration::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::rfc::ical::parse::{ParseError, ParseOptions, ParseResult, ValueField, parse_instant};

/// Time of day carried by a DATE-TIME (RFC 5545 §3.3.12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// Whether this time is in UTC (indicated by 'Z' suffix).
    pub is_utc: bool,
}

impl Time {
    /// Creates a new time value.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, is_utc: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            is_utc,
        }
    }

    /// Seconds elapsed since midnight on the wall clock.
    #[must_use]
    pub fn seconds_of_day(self) -> i64 {
        i64::from(self.hour) * SECONDS_PER_HOUR
            + i64::from(self.minute) * SECONDS_PER_MINUTE
            + i64::from(self.second)
    }
}

/// A DATE or DATE-TIME value.
///
/// A date-only instant carries no time of day at all, so it cannot hold
/// stray time fields. Equality, hashing and ordering look at
/// (year, month, day, hour, minute, second) with a missing time read as
/// midnight; the UTC marker does not take part.
///
/// Field ranges are not checked here. `1997-13-01` is representable and is
/// interpreted by rolling over into the next year; see
/// [`Strictness`](crate::rfc::ical::parse::Strictness) for rejecting it at
/// parse time.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    year: u16,
    month: u8,
    day: u8,
    time: Option<Time>,
}

impl Instant {
    /// Creates a DATE.
    #[must_use]
    pub const fn date(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            time: None,
        }
    }

    /// Creates a UTC DATE-TIME.
    #[must_use]
    pub const fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self::date(year, month, day).at(Time::new(hour, minute, second, true))
    }

    /// Creates a floating DATE-TIME.
    #[must_use]
    pub const fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self::date(year, month, day).at(Time::new(hour, minute, second, false))
    }

    /// Returns a DATE-TIME on the same date at `time`.
    #[must_use]
    pub const fn at(self, time: Time) -> Self {
        Self {
            time: Some(time),
            ..self
        }
    }

    /// Parses the extended form, leniently.
    ///
    /// ## Errors
    /// Returns a `MalformedInstant` error if the text is neither
    /// `YYYY-MM-DD` nor `YYYY-MM-DDTHH:MM:SS[Z]`.
    pub fn parse(s: &str) -> ParseResult<Self> {
        Self::parse_with(s, ParseOptions::new())
    }

    /// Parses with explicit options.
    ///
    /// ## Errors
    /// Returns a `MalformedInstant` error if the text does not match the
    /// configured form, or fails the strict range checks.
    pub fn parse_with(s: &str, options: ParseOptions) -> ParseResult<Self> {
        parse_instant(s, options, ValueField::Value, 1)
    }

    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Hour of a DATE-TIME; zero for a DATE.
    #[must_use]
    pub const fn hour(self) -> u8 {
        match self.time {
            Some(time) => time.hour,
            None => 0,
        }
    }

    /// Minute of a DATE-TIME; zero for a DATE.
    #[must_use]
    pub const fn minute(self) -> u8 {
        match self.time {
            Some(time) => time.minute,
            None => 0,
        }
    }

    /// Second of a DATE-TIME; zero for a DATE.
    #[must_use]
    pub const fn second(self) -> u8 {
        match self.time {
            Some(time) => time.second,
            None => 0,
        }
    }

    /// Returns the time of day, absent for a DATE.
    #[must_use]
    pub const fn time(self) -> Option<Time> {
        self.time
    }

    /// Returns whether this is a DATE without a time of day.
    #[must_use]
    pub const fn is_date(self) -> bool {
        self.time.is_none()
    }

    /// Returns whether this is a DATE-TIME with the `Z` marker.
    #[must_use]
    pub const fn is_utc(self) -> bool {
        matches!(self.time, Some(Time { is_utc: true, .. }))
    }

    /// Returns whether this is a DATE-TIME without the `Z` marker.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self.time, Some(Time { is_utc: false, .. }))
    }

    const fn sort_key(self) -> (u16, u8, u8, u8, u8, u8) {
        (
            self.year,
            self.month,
            self.day,
            self.hour(),
            self.minute(),
            self.second(),
        )
    }

    /// Converts to a chrono wall-clock value, rolling out-of-range fields
    /// over (month 13 is January of the next year, day 0 is the last day of
    /// the previous month, second 60 is the first second of the next minute).
    #[must_use]
    pub fn to_naive_datetime(self) -> NaiveDateTime {
        let seconds = self.time.map_or(0, Time::seconds_of_day);
        self.normalized_date().and_time(NaiveTime::MIN) + TimeDelta::seconds(seconds)
    }

    /// Seconds since 1970-01-01T00:00:00 on the wall clock.
    #[must_use]
    pub fn epoch_seconds(self) -> i64 {
        self.to_naive_datetime()
            .signed_duration_since(DateTime::<Utc>::UNIX_EPOCH.naive_utc())
            .num_seconds()
    }

    #[expect(
        clippy::expect_used,
        reason = "u16 years with u8 month offsets are well inside chrono's supported range"
    )]
    fn normalized_date(self) -> NaiveDate {
        let months = i32::from(self.year) * 12 + i32::from(self.month) - 1;
        let first = NaiveDate::from_ymd_opt(
            months.div_euclid(12),
            months.rem_euclid(12).unsigned_abs() + 1,
            1,
        )
        .expect("first day of a month is always valid");
        first + TimeDelta::days(i64::from(self.day) - 1)
    }

    /// Creates a DATE-TIME from a chrono value. Returns `None` outside
    /// years 0 through 9999.
    #[must_use]
    pub fn from_naive_datetime(value: NaiveDateTime, is_utc: bool) -> Option<Self> {
        let date = Self::from_naive_date(value.date())?;
        let time = Time::new(
            u8::try_from(value.hour()).ok()?,
            u8::try_from(value.minute()).ok()?,
            u8::try_from(value.second()).ok()?,
            is_utc,
        );
        Some(date.at(time))
    }

    /// Creates a DATE from a chrono value. Returns `None` outside years 0
    /// through 9999.
    #[must_use]
    pub fn from_naive_date(value: NaiveDate) -> Option<Self> {
        let year = u16::try_from(value.year()).ok().filter(|year| *year <= 9999)?;
        Some(Self::date(
            year,
            u8::try_from(value.month()).ok()?,
            u8::try_from(value.day()).ok()?,
        ))
    }

    /// Returns the iCalendar content-line (basic) form, e.g. `19970101T180000Z`.
    #[must_use]
    pub fn to_ical_string(self) -> String {
        let mut out = format!("{:04}{:02}{:02}", self.year, self.month, self.day);
        if let Some(time) = self.time {
            out.push_str(&format!(
                "T{:02}{:02}{:02}",
                time.hour, time.minute, time.second
            ));
            if time.is_utc {
                out.push('Z');
            }
        }
        out
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Instant {}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if let Some(time) = self.time {
            write!(
                f,
                "T{:02}:{:02}:{:02}",
                time.hour, time.minute, time.second
            )?;
            if time.is_utc {
                write!(f, "Z")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
