//! jCal representation of PERIOD values (RFC 7265 §3.6.9).
//!
//! DATE-TIME and DURATION values serialize as their canonical strings; a
//! PERIOD is an array of its start followed by its end or duration.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use super::{Duration, Instant, Interval};
use crate::rfc::ical::parse::{ParseOptions, ValueField, parse_instant, parse_interval_end};

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.span().is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(self.start())?;
        if let Some(span) = self.span() {
            seq.serialize_element(&span.to_string())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        let options = ParseOptions::new();

        match raw.as_slice() {
            [start] => parse_instant(start, options, ValueField::Start, 1)
                .map(Self::open)
                .map_err(de::Error::custom),
            [start, rest] => {
                let start =
                    parse_instant(start, options, ValueField::Start, 1).map_err(de::Error::custom)?;
                let span = parse_interval_end(rest, options, 1).map_err(de::Error::custom)?;
                Ok(Self::new(start, Some(span)))
            }
            _ => Err(de::Error::invalid_length(raw.len(), &"a period of one or two values")),
        }
    }
}
