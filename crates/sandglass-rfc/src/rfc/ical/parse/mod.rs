//! iCalendar value parsers.

mod error;
mod options;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult, ValueField};
pub use options::{ParseOptions, Strictness, ValueFormat};
pub use values::{
    DURATION_SIGIL, INTERVAL_SEPARATOR, parse_duration, parse_instant, parse_interval,
    parse_interval_end,
};
