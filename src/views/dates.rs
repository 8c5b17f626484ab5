//! Date ranges for attendance queries.

use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::error::ApiError;

/// Window used by both attendance overviews when the user has not picked one.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Inclusive `[start, end]` calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Parse two ISO `YYYY-MM-DD` dates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for malformed dates or a start after
    /// the end.
    pub fn parse(start: &str, end: &str) -> Result<Self, ApiError> {
        let start = parse_iso(start)?;
        let end = parse_iso(end)?;
        if start > end {
            return Err(ApiError::Rejected("Start date must be on or before the end date.".to_owned()));
        }
        Ok(Self { start, end })
    }

    /// The `days` days ending on `today`.
    #[must_use]
    pub fn last_days(today: Date, days: i64) -> Self {
        let start = today.checked_sub(Duration::days(days)).unwrap_or(Date::MIN);
        Self { start, end: today }
    }

    /// Default range: the last 30 days ending today (UTC).
    #[must_use]
    pub fn default_window() -> Self {
        Self::last_days(today_utc(), DEFAULT_RANGE_DAYS)
    }

    #[must_use]
    pub fn start_iso(&self) -> String {
        format_iso(self.start)
    }

    #[must_use]
    pub fn end_iso(&self) -> String {
        format_iso(self.end)
    }

    /// Replace one bound from form input, keeping the other.
    ///
    /// # Errors
    ///
    /// See [`DateRange::parse`].
    pub fn with_start(&self, start: &str) -> Result<Self, ApiError> {
        Self::parse(start, &self.end_iso())
    }

    /// # Errors
    ///
    /// See [`DateRange::parse`].
    pub fn with_end(&self, end: &str) -> Result<Self, ApiError> {
        Self::parse(&self.start_iso(), end)
    }
}

#[must_use]
pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

fn parse_iso(raw: &str) -> Result<Date, ApiError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ApiError::Rejected(format!("Invalid date `{raw}`; expected YYYY-MM-DD.")))
}

fn format_iso(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn last_days_spans_month_boundary() {
        let range = DateRange::last_days(date!(2024 - 03 - 10), 30);
        assert_eq!(range.start_iso(), "2024-02-09");
        assert_eq!(range.end_iso(), "2024-03-10");
    }

    #[test]
    fn parse_accepts_iso_and_rejects_inverted() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        assert_eq!(range.start, date!(2024 - 01 - 01));
        assert!(DateRange::parse("2024-02-01", "2024-01-31").is_err());
        assert!(DateRange::parse("01/02/2024", "2024-01-31").is_err());
    }

    #[test]
    fn single_day_range_is_valid() {
        assert!(DateRange::parse("2024-01-05", "2024-01-05").is_ok());
    }

    #[test]
    fn with_start_keeps_end() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        let moved = range.with_start("2024-01-15").unwrap();
        assert_eq!(moved.end, range.end);
        assert!(range.with_end("2023-12-31").is_err());
    }
}
