//! Cross-module tests for iCalendar period values.
