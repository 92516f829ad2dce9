//! Parser configuration.

/// How far the instant parser checks calendar fields beyond their shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Only digit counts and separators are checked; `1997-13-45` is accepted.
    #[default]
    Lenient,
    /// The date must exist in the proleptic Gregorian calendar and the time
    /// of day must be in range (second 60 is allowed for leap seconds).
    Strict,
}

/// Text form of DATE and DATE-TIME values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// `1997-01-01` and `1997-01-01T18:00:00Z`.
    #[default]
    Extended,
    /// `19970101` and `19970101T180000Z`, as written in iCalendar content lines.
    Basic,
}

/// Options shared by the instant and interval parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub strictness: Strictness,
    pub format: ValueFormat,
}

impl ParseOptions {
    /// Lenient parsing of the extended form.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strictness: Strictness::Lenient,
            format: ValueFormat::Extended,
        }
    }

    /// Sets the strictness.
    #[must_use]
    pub const fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Sets the accepted text form.
    #[must_use]
    pub const fn format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self.strictness, Strictness::Strict)
    }
}
