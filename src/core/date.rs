//! Calendar dates accepted for lookups, and the clock they are checked against

use chrono::{Datelike, Local, NaiveDate};
use std::fmt::Display;

use super::error::LookupError;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A validated calendar date used as the lookup and cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Builds a key from components, `None` if they are not a calendar date.
    /// Years are limited to 1 through 9999.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(DateKey)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Source of "today" for validation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parses `YYYY-MM-DD` and checks the date is a real day strictly before today.
pub fn validate(input: &str, clock: &dyn Clock) -> Result<DateKey, LookupError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() != 3 {
        return Err(LookupError::malformed_date(
            input,
            "expected YYYY-MM-DD",
        ));
    }

    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| LookupError::malformed_date(input, "year is not a number"))?;
    let month = parts[1]
        .parse::<u32>()
        .map_err(|_| LookupError::malformed_date(input, "month is not a number"))?;
    let day = parts[2]
        .parse::<u32>()
        .map_err(|_| LookupError::malformed_date(input, "day is not a number"))?;

    let key = DateKey::from_ymd(year, month, day)
        .ok_or_else(|| LookupError::malformed_date(input, "not a calendar date"))?;

    let today = clock.today();
    if key.date() >= today {
        return Err(LookupError::NotPast {
            date: key.date(),
            today,
        });
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap())
    }

    #[test]
    fn test_valid_past_date() {
        let key = validate("2021-02-15", &clock()).unwrap();
        assert_eq!((key.year(), key.month(), key.day()), (2021, 2, 15));
        assert_eq!(key.to_string(), "2021-02-15");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let key = validate("  2020-12-31\n", &clock()).unwrap();
        assert_eq!(key, DateKey::from_ymd(2020, 12, 31).unwrap());
    }

    #[test]
    fn test_unpadded_components_are_accepted() {
        let key = validate("2021-2-5", &clock()).unwrap();
        assert_eq!(key, DateKey::from_ymd(2021, 2, 5).unwrap());
    }

    #[test]
    fn test_leap_day() {
        assert!(validate("2020-02-29", &clock()).is_ok());
        let err = validate("2019-02-29", &clock()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDate);
    }

    #[test]
    fn test_out_of_range_components() {
        for input in [
            "2020-13-01",
            "2020-00-10",
            "2021-02-30",
            "2020-04-31",
            "2020-01-00",
            "0000-01-01",
            "10000-01-01",
        ] {
            let err = validate(input, &clock()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedDate, "input: {input}");
            assert!(err.to_string().contains("not a calendar date"));
        }
    }

    #[test]
    fn test_malformed_separators_and_text() {
        for input in [
            "",
            "2021/02/15",
            "2021-02",
            "2021-02-15-01",
            "20210215",
            "abcd-ef-gh",
            "2021-02-1x",
            "2021--15",
        ] {
            let err = validate(input, &clock()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedDate, "input: {input:?}");
        }
    }

    #[test]
    fn test_today_and_future_are_rejected() {
        let err = validate("2021-03-01", &clock()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotPast);
        assert!(err.to_string().starts_with("Your date must be prior to today"));

        let err = validate("2021-03-02", &clock()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotPast);

        let err = validate("2030-01-01", &clock()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotPast);
    }

    #[test]
    fn test_year_bounds() {
        assert!(DateKey::from_ymd(0, 12, 31).is_none());
        assert!(DateKey::from_ymd(-1, 1, 1).is_none());
        assert!(DateKey::from_ymd(10000, 1, 1).is_none());
        assert_eq!(
            validate("0001-01-01", &clock()).unwrap().to_string(),
            "0001-01-01"
        );
    }

    #[test]
    fn test_day_before_today_is_accepted() {
        let key = validate("2021-02-28", &clock()).unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
    }

    #[test]
    fn test_system_clock_rejects_today() {
        let today = SystemClock.today();
        let input = today.format("%Y-%m-%d").to_string();
        let err = validate(&input, &SystemClock).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotPast);
    }
}
