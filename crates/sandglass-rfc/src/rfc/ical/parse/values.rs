//! Value type parsers for iCalendar periods (RFC 5545 §3.3.5, §3.3.6, §3.3.9).

use chrono::NaiveDate;

use super::error::{ParseError, ParseErrorKind, ParseResult, ValueField};
use super::options::{ParseOptions, ValueFormat};
use crate::rfc::ical::core::{Duration, Instant, Interval, IntervalEnd, Time};

/// Separator between the two halves of a PERIOD.
pub const INTERVAL_SEPARATOR: char = '/';

/// Leading designator of a DURATION, after the optional sign.
pub const DURATION_SIGIL: char = 'P';

/// Positions of each field within a DATE / DATE-TIME text form.
struct Layout {
    /// Shape of a DATE; `#` is a digit, anything else a literal.
    date: &'static str,
    /// Shape of a DATE-TIME without the `Z` marker.
    date_time: &'static str,
    month: usize,
    day: usize,
    hour: usize,
    minute: usize,
    second: usize,
}

const EXTENDED: Layout = Layout {
    date: "####-##-##",
    date_time: "####-##-##T##:##:##",
    month: 5,
    day: 8,
    hour: 11,
    minute: 14,
    second: 17,
};

const BASIC: Layout = Layout {
    date: "########",
    date_time: "########T######",
    month: 4,
    day: 6,
    hour: 9,
    minute: 11,
    second: 13,
};

impl ValueFormat {
    const fn layout(self) -> &'static Layout {
        match self {
            Self::Extended => &EXTENDED,
            Self::Basic => &BASIC,
        }
    }

    const fn expected(self) -> &'static str {
        match self {
            Self::Extended => "expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS[Z]",
            Self::Basic => "expected YYYYMMDD or YYYYMMDDTHHMMSS[Z]",
        }
    }
}

/// Parses a DATE or DATE-TIME value.
///
/// Extended format: `1997-07-14` or `1997-07-14T13:30:00[Z]`.
/// Basic format: `19970714` or `19970714T133000[Z]`.
///
/// `column` is the 1-based position of `s` within the caller's text and is
/// used for error positions.
///
/// ## Errors
/// Returns a `MalformedInstant` error if the text does not match the shape
/// of the configured format, or if strict options reject a field's range.
pub fn parse_instant(
    s: &str,
    options: ParseOptions,
    field: ValueField,
    column: usize,
) -> ParseResult<Instant> {
    let fail = |offset: usize, reason: &str| {
        ParseError::new(ParseErrorKind::MalformedInstant, field, s, column + offset)
            .with_context(reason)
    };

    let layout = options.format.layout();
    let (body, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    let shape = if body.len() == layout.date_time.len() {
        layout.date_time
    } else if body.len() == layout.date.len() && !is_utc {
        layout.date
    } else {
        return Err(fail(0, options.format.expected()));
    };

    let bytes = body.as_bytes();
    for (offset, (&actual, expected)) in bytes.iter().zip(shape.bytes()).enumerate() {
        if expected == b'#' {
            if !actual.is_ascii_digit() {
                return Err(fail(offset, "expected a digit"));
            }
        } else if actual != expected {
            return Err(fail(
                offset,
                &format!("expected '{}' separator", char::from(expected)),
            ));
        } else {
            // Literal separator in place.
        }
    }

    let mut instant = Instant::date(
        four_digits(&bytes[0..4]),
        two_digits(&bytes[layout.month..]),
        two_digits(&bytes[layout.day..]),
    );
    if shape == layout.date_time {
        instant = instant.at(Time::new(
            two_digits(&bytes[layout.hour..]),
            two_digits(&bytes[layout.minute..]),
            two_digits(&bytes[layout.second..]),
            is_utc,
        ));
    }

    if options.is_strict() {
        check_ranges(instant, layout).map_err(|(offset, reason)| fail(offset, reason))?;
    }

    Ok(instant)
}

/// Reads four validated ASCII digits.
fn four_digits(bytes: &[u8]) -> u16 {
    bytes[..4]
        .iter()
        .fold(0, |acc, digit| acc * 10 + u16::from(digit - b'0'))
}

/// Reads two validated ASCII digits.
fn two_digits(bytes: &[u8]) -> u8 {
    (bytes[0] - b'0') * 10 + (bytes[1] - b'0')
}

/// Checks calendar ranges, returning the offending offset and a reason.
fn check_ranges(instant: Instant, layout: &Layout) -> Result<(), (usize, &'static str)> {
    if !(1..=12).contains(&instant.month()) {
        return Err((layout.month, "month out of range"));
    }
    let exists = NaiveDate::from_ymd_opt(
        i32::from(instant.year()),
        u32::from(instant.month()),
        u32::from(instant.day()),
    )
    .is_some();
    if !exists {
        return Err((layout.day, "day out of range for month"));
    }

    if let Some(time) = instant.time() {
        if time.hour > 23 {
            return Err((layout.hour, "hour out of range"));
        }
        if time.minute > 59 {
            return Err((layout.minute, "minute out of range"));
        }
        // 60 is a leap second.
        if time.second > 60 {
            return Err((layout.second, "second out of range"));
        }
    }
    Ok(())
}

/// Parses a DURATION value (RFC 5545 §3.3.6).
///
/// Format: `[+|-]P[nW]` or `[+|-]P[nD][T[nH][nM][nS]]`, with at least one
/// component, units in descending order and each unit at most once.
///
/// ## Errors
/// Returns a `MalformedDuration` error if the sigil is missing, no
/// component follows it, or a component is malformed or out of place.
pub fn parse_duration(s: &str, field: ValueField, column: usize) -> ParseResult<Duration> {
    let fail = |offset: usize, reason: &str| {
        ParseError::new(ParseErrorKind::MalformedDuration, field, s, column + offset)
            .with_context(reason)
    };

    let bytes = s.as_bytes();
    let mut dur = Duration::zero();
    let mut pos = 0;

    // Parse optional sign
    match bytes.first() {
        Some(b'-') => {
            dur.negative = true;
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }

    if bytes.get(pos).copied().map(char::from) != Some(DURATION_SIGIL) {
        return Err(fail(pos, "expected duration sigil 'P'"));
    }
    pos += 1;

    let mut in_time = false;
    let mut time_components = 0;
    // Rank of the last designator: W=1, D=2, H=3, M=4, S=5.
    let mut last_rank = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'T' {
            if in_time {
                return Err(fail(pos, "repeated time designator 'T'"));
            }
            in_time = true;
            pos += 1;
            continue;
        }

        let (value, designator_pos) =
            read_number(bytes, pos).map_err(|reason| fail(pos, reason))?;
        pos = designator_pos;

        let Some(&designator) = bytes.get(pos) else {
            return Err(fail(pos, "expected a unit designator after the number"));
        };
        let rank = designator_rank(designator, in_time).map_err(|reason| fail(pos, reason))?;
        if last_rank == 1 {
            return Err(fail(pos, "weeks cannot be combined with other units"));
        }
        if rank <= last_rank {
            return Err(fail(pos, "units out of order or repeated"));
        }

        match rank {
            1 => dur.weeks = value,
            2 => dur.days = value,
            3 => dur.hours = value,
            4 => dur.minutes = value,
            _ => dur.seconds = value,
        }
        if in_time {
            time_components += 1;
        }
        last_rank = rank;
        pos += 1;
    }

    if in_time && time_components == 0 {
        return Err(fail(pos, "expected a time component after 'T'"));
    }
    if last_rank == 0 {
        return Err(fail(pos, "expected at least one duration component"));
    }
    // A zero span has no sign.
    if dur.is_zero() {
        dur.negative = false;
    }

    Ok(dur)
}

/// Reads a run of ASCII digits starting at `pos`, returning the value and
/// the position just past the digits.
fn read_number(bytes: &[u8], pos: usize) -> Result<(u32, usize), &'static str> {
    let digits = bytes[pos..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return Err("expected a number");
    }

    let value = bytes[pos..pos + digits]
        .iter()
        .try_fold(0_u32, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
        })
        .ok_or("number out of range")?;
    Ok((value, pos + digits))
}

/// Maps a unit designator to its rank, checking it sits on the right side
/// of the time designator.
fn designator_rank(designator: u8, in_time: bool) -> Result<u8, &'static str> {
    match (designator, in_time) {
        (b'W', false) => Ok(1),
        (b'D', false) => Ok(2),
        (b'H', true) => Ok(3),
        (b'M', true) => Ok(4),
        (b'S', true) => Ok(5),
        (b'W' | b'D', true) => Err("week and day units must come before 'T'"),
        (b'H' | b'M' | b'S', false) => Err("time units must follow 'T'"),
        _ => Err("unknown unit designator"),
    }
}

/// Returns whether `s` opens with the duration sigil, after an optional sign.
fn opens_with_duration_sigil(s: &str) -> bool {
    s.strip_prefix(['+', '-'])
        .unwrap_or(s)
        .starts_with(DURATION_SIGIL)
}

/// Parses the right-hand side of a PERIOD.
///
/// The choice between the two grammars is made on the first character: text
/// opening with the duration sigil is only ever parsed as a DURATION, and
/// anything else only as an instant.
///
/// ## Errors
/// Returns a `MalformedDuration` or `MalformedInstant` error for whichever
/// grammar was selected.
pub fn parse_interval_end(
    s: &str,
    options: ParseOptions,
    column: usize,
) -> ParseResult<IntervalEnd> {
    if opens_with_duration_sigil(s) {
        parse_duration(s, ValueField::End, column).map(IntervalEnd::Duration)
    } else {
        parse_instant(s, options, ValueField::End, column).map(IntervalEnd::End)
    }
}

/// Parses a PERIOD value (RFC 5545 §3.3.9).
///
/// Format: start"/"end or start"/"duration
///
/// ## Errors
/// Returns a `MalformedInterval` error unless the text contains exactly one
/// separator, and otherwise the error of the failing side.
pub fn parse_interval(s: &str, options: ParseOptions) -> ParseResult<Interval> {
    let fail = |offset: usize, reason: &str| {
        ParseError::new(ParseErrorKind::MalformedInterval, ValueField::Value, s, offset + 1)
            .with_context(reason)
    };

    let mut separators = s.match_indices(INTERVAL_SEPARATOR).map(|(i, _)| i);
    let Some(slash_pos) = separators.next() else {
        return Err(fail(0, "missing '/' separator"));
    };
    if let Some(extra) = separators.next() {
        return Err(fail(extra, "more than one '/' separator"));
    }

    let start_str = &s[..slash_pos];
    let end_str = &s[slash_pos + 1..];

    let result = parse_instant(start_str, options, ValueField::Start, 1).and_then(|start| {
        parse_interval_end(end_str, options, slash_pos + 2)
            .map(|span| Interval::new(start, Some(span)))
    });

    match &result {
        Ok(_) => tracing::trace!(input = %s, "Parsed period value"),
        Err(e) => tracing::debug!(input = %s, error = %e, "Rejected period value"),
    }
    result
}

#[cfg(test)]
#[path = "values_tests.rs"]
mod tests;
