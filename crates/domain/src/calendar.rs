// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar dates for check-in scheduling.
//!
//! Dates have day granularity and a canonical zero-padded `DD/MM/YYYY`
//! wire form. Scheduling is restricted to business days (Monday through
//! Friday); there is no holiday calendar.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month, Weekday};

/// Returns whether a date falls on a business day (Monday through Friday).
#[must_use]
pub fn is_business_day(date: Date) -> bool {
    !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// A calendar date a check-in is scheduled for.
///
/// Serialized as a `DD/MM/YYYY` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckinDate {
    date: Date,
}

impl CheckinDate {
    /// Wraps an already-constructed calendar date.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self { date }
    }

    /// Parses a date from its canonical `DD/MM/YYYY` form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the input does not have three
    /// `/`-separated numeric parts or does not name a real calendar date.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidDate {
            raw: raw.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = raw.trim().split('/').collect();
        let [day_part, month_part, year_part] = parts[..] else {
            return Err(invalid("expected DD/MM/YYYY"));
        };

        let day: u8 = day_part.parse().map_err(|_| invalid("invalid day"))?;
        let month_number: u8 = month_part.parse().map_err(|_| invalid("invalid month"))?;
        let year: i32 = year_part.parse().map_err(|_| invalid("invalid year"))?;

        let month: Month =
            Month::try_from(month_number).map_err(|_| invalid("month must be 1-12"))?;
        let date: Date = Date::from_calendar_date(year, month, day)
            .map_err(|_| invalid("no such calendar date"))?;

        Ok(Self { date })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns whether this date is a business day (Monday through Friday).
    #[must_use]
    pub fn is_business_day(&self) -> bool {
        is_business_day(self.date)
    }
}

impl std::fmt::Display for CheckinDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.date.day(),
            u8::from(self.date.month()),
            self.date.year()
        )
    }
}

impl std::str::FromStr for CheckinDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CheckinDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CheckinDate> for String {
    fn from(date: CheckinDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_weekdays_are_business_days() {
        // 2024-06-10 is a Monday.
        assert!(is_business_day(date!(2024 - 06 - 10)));
        assert!(is_business_day(date!(2024 - 06 - 11)));
        assert!(is_business_day(date!(2024 - 06 - 12)));
        assert!(is_business_day(date!(2024 - 06 - 13)));
        assert!(is_business_day(date!(2024 - 06 - 14)));
    }

    #[test]
    fn test_weekend_days_are_not_business_days() {
        assert!(!is_business_day(date!(2024 - 06 - 15))); // Saturday
        assert!(!is_business_day(date!(2024 - 06 - 16))); // Sunday
    }

    #[test]
    fn test_predicate_matches_weekday_over_a_full_week() {
        let mut current: Date = date!(2024 - 06 - 10);
        for _ in 0..7 {
            let expected: bool =
                !matches!(current.weekday(), Weekday::Saturday | Weekday::Sunday);
            assert_eq!(is_business_day(current), expected, "{current}");
            current = current.next_day().unwrap();
        }
    }

    #[test]
    fn test_parse_canonical_form() {
        let parsed: CheckinDate = CheckinDate::parse("10/06/2024").unwrap();
        assert_eq!(parsed.date(), date!(2024 - 06 - 10));
    }

    #[test]
    fn test_display_is_zero_padded() {
        let date: CheckinDate = CheckinDate::new(date!(2024 - 06 - 03));
        assert_eq!(date.to_string(), "03/06/2024");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(CheckinDate::parse("2024-06-10").is_err());
        assert!(CheckinDate::parse("10/06").is_err());
        assert!(CheckinDate::parse("32/01/2024").is_err());
        assert!(CheckinDate::parse("10/13/2024").is_err());
        assert!(CheckinDate::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_leap_day() {
        assert!(CheckinDate::parse("29/02/2023").is_err());
        assert!(CheckinDate::parse("29/02/2024").is_ok());
    }
}
