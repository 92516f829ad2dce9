//! Periods embedded in larger serde documents, as in a FREEBUSY property.

use serde::{Deserialize, Serialize};
use serde_json::json;
use sandglass_test::ical::{Duration, Instant, Interval};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct FreeBusy {
    fbtype: String,
    periods: Vec<Interval>,
}

#[test]
fn free_busy_serializes_periods_as_jcal_arrays() {
    let doc = FreeBusy {
        fbtype: "BUSY".to_string(),
        periods: vec![
            Interval::with_end(
                Instant::utc(1997, 3, 8, 16, 0, 0),
                Instant::utc(1997, 3, 8, 18, 0, 0),
            ),
            Interval::with_duration(Instant::utc(1997, 3, 9, 9, 0, 0), Duration::hms(1, 30, 0)),
        ],
    };

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        json!({
            "fbtype": "BUSY",
            "periods": [
                ["1997-03-08T16:00:00Z", "1997-03-08T18:00:00Z"],
                ["1997-03-09T09:00:00Z", "PT1H30M"],
            ],
        })
    );

    let back: FreeBusy = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn free_busy_rejects_malformed_period() {
    let value = json!({
        "fbtype": "BUSY",
        "periods": [["1997-03-08T16:00:00Z", "P1Y"]],
    });
    let err = serde_json::from_value::<FreeBusy>(value).unwrap_err();
    assert!(err.to_string().contains("unknown unit designator"));
}

#[test]
fn total_busy_time() {
    let periods = [
        "1997-03-08T16:00:00Z/1997-03-08T18:00:00Z",
        "1997-03-09T09:00:00Z/PT1H30M",
        "1997-03-10T22:00:00Z/1997-03-11T00:30:00Z",
    ]
    .map(|text| Interval::parse(text).unwrap());

    let total: i64 = periods.iter().map(|p| p.get_duration().as_seconds()).sum();
    assert_eq!(Duration::from_seconds(total).to_string(), "PT6H");
}
