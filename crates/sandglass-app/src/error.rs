use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RfcError(#[from] sandglass_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] sandglass_core::error::CoreError),

    #[error("failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
