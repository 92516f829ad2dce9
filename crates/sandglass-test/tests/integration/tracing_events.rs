//! Tracing events emitted while parsing and processing.

use sandglass_test::app::Processor;
use sandglass_test::ical::Interval;

use super::helpers::{EventCapture, run_processor};

#[test]
fn rejected_period_emits_debug_event() {
    let capture = EventCapture::default();
    let result = capture.record(|| Interval::parse("1997-01-02T07:00:00Z/Psome time after"));

    assert!(result.is_err());
    assert_eq!(capture.events(), ["DEBUG Rejected period value"]);
}

#[test]
fn parsed_period_emits_only_trace_event() {
    let capture = EventCapture::default();
    capture.record(|| Interval::parse("1997-01-01T18:00:00Z/PT5H30M")).unwrap();

    assert_eq!(capture.events(), ["TRACE Parsed period value"]);
}

#[test]
fn processor_reports_summary_at_info() {
    let capture = EventCapture::default();
    let output = capture.record(|| {
        run_processor(
            Processor::default(),
            &["1997-01-01T18:00:00Z/PT5H30M", "1997-01-01T18:00:00Z"],
        )
    });
    assert_eq!(output.summary.failed, 1);

    let events = capture.events();
    assert!(events.contains(&"DEBUG Period rejected".to_string()));
    assert_eq!(
        events.last().map(String::as_str),
        Some("INFO Finished processing periods")
    );
}
