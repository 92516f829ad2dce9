use thiserror::Error;

use super::ValueType;

/// Errors raised when a PERIOD is assembled from separate values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructError {
    #[error(
        "period start must be a DATE-TIME value, found {}",
        .found.map_or("nothing", ValueType::as_str)
    )]
    MissingStart { found: Option<ValueType> },

    #[error("period cannot accept both end and duration")]
    ConflictingEndAndDuration,

    #[error("period end must be a DATE-TIME value, found {found}")]
    InvalidEndType { found: ValueType },

    #[error("period duration must be a DURATION value, found {found}")]
    InvalidDurationType { found: ValueType },
}
