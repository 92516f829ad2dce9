#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Running a [`Processor`] against in-memory streams
//! - Loading settings from inline TOML
//! - Recording tracing events emitted while a closure runs

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use sandglass_test::app::{Processor, Summary};
use sandglass_test::config::Settings;
use sandglass_test::ical::Interval;

/// Output of one processor run.
pub struct RunOutput {
    pub summary: Summary,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `processor` over `inputs`, capturing both streams.
pub fn run_processor(processor: Processor, inputs: &[&str]) -> RunOutput {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let summary = processor
        .run(inputs.iter().copied(), &mut stdout, &mut stderr)
        .expect("in-memory writes do not fail");

    RunOutput {
        summary,
        stdout: String::from_utf8(stdout).expect("reports are UTF-8"),
        stderr: String::from_utf8(stderr).expect("errors are UTF-8"),
    }
}

/// Loads settings from the defaults overlaid with inline TOML.
pub fn settings_from_toml(toml: &str) -> Settings {
    let builder = Settings::defaults()
        .expect("defaults are valid")
        .add_source(config::File::from_str(toml, config::FileFormat::Toml));
    Settings::from_builder(builder).expect("settings load")
}

/// Parses a period that the test expects to be valid.
pub fn period(text: &str) -> Interval {
    Interval::parse(text).expect("valid period")
}

/// Layer that records each event as `<LEVEL> <message>`.
#[derive(Clone, Default)]
pub struct EventCapture {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventCapture {
    /// Runs `f` with this layer as the thread's subscriber.
    pub fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageVisitor::default();
        event.record(&mut message);
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("{} {}", event.metadata().level(), message.0));
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}
