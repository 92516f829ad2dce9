//! iCalendar PERIOD, DATE-TIME and DURATION values (RFC 5545 §3.3.5, §3.3.6, §3.3.9).

pub mod error;
pub mod rfc;
