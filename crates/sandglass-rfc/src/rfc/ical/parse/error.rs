//! iCalendar value parsing error types.

use std::fmt;

/// Result type for iCalendar value parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for iCalendar value parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Which part of a period was being parsed.
    pub field: ValueField,
    /// The text handed to the failing grammar.
    pub input: String,
    /// Column of the offending character within the caller's text (1-based).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        field: ValueField,
        input: impl Into<String>,
        column: usize,
    ) -> Self {
        Self {
            kind,
            field,
            input: input.into(),
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.field != ValueField::Value {
            write!(f, " for period {}", self.field)?;
        }
        write!(f, " \"{}\" at column {}", self.input, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors, one per grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Period text without exactly one `/` separator.
    MalformedInterval,
    /// Text matching neither the DATE nor the DATE-TIME grammar.
    MalformedInstant,
    /// Text opening like a duration that does not follow the DURATION grammar.
    MalformedDuration,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInterval => write!(f, "invalid period value"),
            Self::MalformedInstant => write!(f, "invalid date-time value"),
            Self::MalformedDuration => write!(f, "invalid duration value"),
        }
    }
}

/// Position of a value inside a PERIOD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    /// A value parsed on its own, or a period as a whole.
    Value,
    /// The left-hand side of `start/end`.
    Start,
    /// The right-hand side of `start/end` or `start/duration`.
    End,
}

impl fmt::Display for ValueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => write!(f, "value"),
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
