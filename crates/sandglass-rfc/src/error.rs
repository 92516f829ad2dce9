use thiserror::Error;

use crate::rfc::ical::core::ConstructError;
use crate::rfc::ical::parse::ParseError;

/// RFC parsing and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ConstructError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
