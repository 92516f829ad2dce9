pub use sandglass_core::config::*;
use sandglass_rfc::rfc::ical::parse::{ParseOptions, Strictness, ValueFormat};

use crate::cli::Cli;

/// ## Summary
/// Builds parser options from the loaded settings, letting command-line
/// flags switch on strictness or the basic format.
#[must_use]
pub fn parse_options(parsing: &ParsingConfig, cli: &Cli) -> ParseOptions {
    let strictness = if parsing.strict || cli.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };

    let format = if cli.basic || parsing.format == TextFormat::Basic {
        ValueFormat::Basic
    } else {
        ValueFormat::Extended
    };

    ParseOptions::new().strictness(strictness).format(format)
}
