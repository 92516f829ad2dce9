//! End-to-end tests across the sandglass crates.

mod cli_processing;
mod config_loading;
mod free_busy;
mod helpers;
mod periods;
mod tracing_events;
