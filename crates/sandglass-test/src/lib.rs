//! Sandglass iCalendar period tools - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `sandglass_test::` paths.

pub mod ical {
    pub use sandglass_rfc::error::{RfcError, RfcResult};
    pub use sandglass_rfc::rfc::ical::*;
}

pub mod config {
    pub use sandglass_app::config::*;
}

pub mod app {
    pub use sandglass_app::cli::Cli;
    pub use sandglass_app::error::{AppError, AppResult};
    pub use sandglass_app::process::{Processor, Summary};
}
