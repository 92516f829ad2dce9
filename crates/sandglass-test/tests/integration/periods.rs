//! Period parsing and construction through the public API.

use sandglass_test::ical::{
    ConstructError, Duration, Instant, Interval, ParseErrorKind, ParseOptions, RfcError,
    Strictness, Value, ValueFormat,
};

use super::helpers::period;

#[test_log::test]
fn explicit_and_duration_forms_describe_same_span() {
    let explicit = period("1997-01-01T18:30:20Z/1997-01-02T07:00:00Z");
    let derived = Interval::from_parts(
        Some(Value::Instant(*explicit.start())),
        None,
        Some(Value::Duration(explicit.get_duration())),
    )
    .unwrap();

    assert_eq!(derived.to_string(), "1997-01-01T18:30:20Z/PT12H29M40S");
    assert_eq!(derived.end_instant(), explicit.end().copied());
}

#[test]
fn canonical_text_round_trips() {
    for text in [
        "1997-01-01T18:00:00Z/PT5H30M",
        "1997-01-01/P1W",
        "1997-01-01T09:00:00/1997-01-01T09:30:00",
        "1997-03-08T16:00:00Z/-P1DT2H",
    ] {
        assert_eq!(period(text).to_string(), text);
        assert_eq!(text.parse::<Interval>().unwrap(), period(text));
    }
}

#[test]
fn errors_name_the_failing_grammar() {
    let cases = [
        (
            "1997-01-01T18:30:20Z1997-01-02T07:00:00Z",
            ParseErrorKind::MalformedInterval,
        ),
        (
            "some time before/1997-01-02T07:00:00Z",
            ParseErrorKind::MalformedInstant,
        ),
        (
            "1997-01-02T07:00:00Z/Psome time after",
            ParseErrorKind::MalformedDuration,
        ),
        (
            "1997-01-02T07:00:00Z/some time after",
            ParseErrorKind::MalformedInstant,
        ),
    ];

    for (text, kind) in cases {
        let err = Interval::parse(text).unwrap_err();
        assert_eq!(err.kind, kind, "input {text}");
    }
}

#[test]
fn strictness_decides_out_of_range_fields() {
    let text = "1997-13-01T00:00:00Z/PT1H";
    let lenient = period(text);
    assert_eq!(lenient.start().month(), 13);
    assert_eq!(lenient.end_instant().unwrap().to_string(), "1998-01-01T01:00:00Z");

    let strict = ParseOptions::new().strictness(Strictness::Strict);
    let err = Interval::parse_with(text, strict).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MalformedInstant);
    assert_eq!(err.context.as_deref(), Some("month out of range"));
}

#[test]
fn basic_and_extended_forms_agree() {
    let basic = ParseOptions::new().format(ValueFormat::Basic);
    let from_basic = Interval::parse_with("19970101T180000Z/PT5H30M", basic).unwrap();
    let from_extended = period("1997-01-01T18:00:00Z/PT5H30M");

    assert_eq!(from_basic, from_extended);
    assert_eq!(from_basic.to_ical_string(), "19970101T180000Z/PT5H30M");
}

#[test]
fn construction_errors_convert_into_crate_error() {
    let start = Instant::utc(1970, 1, 2, 3, 4, 5);
    let result: Result<Interval, RfcError> = Interval::from_parts(
        Some(start.into()),
        Some(start.into()),
        Some(Duration::hms(3, 2, 1).into()),
    )
    .map_err(RfcError::from);

    assert_eq!(
        result.unwrap_err(),
        RfcError::ValidationError(ConstructError::ConflictingEndAndDuration)
    );
}

#[test]
fn chrono_interop() {
    let start = Instant::utc(2000, 2, 28, 23, 0, 0);
    let naive = start.to_naive_datetime();
    assert_eq!(naive.to_string(), "2000-02-28 23:00:00");

    let later = naive + chrono::TimeDelta::hours(2);
    let end = Instant::from_naive_datetime(later, true).unwrap();
    assert_eq!(end.to_string(), "2000-02-29T01:00:00Z");
    assert_eq!(
        Interval::with_end(start, end).get_duration(),
        Duration::hms(2, 0, 0)
    );
}
