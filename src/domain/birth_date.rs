//! Birth date validation and whole-year age computation.
//!
//! The age rules depend on "today", which is taken as an explicit parameter
//! so boundary conditions can be tested deterministically. The `_today`
//! wrapper is the convenience entry point for callers that just want the
//! local calendar date.

use super::errors::ValidationError;
use crate::outcome::Validity;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Youngest age accepted at registration, inclusive.
const MIN_AGE_YEARS: i32 = 16;

/// Oldest age accepted, inclusive.
const MAX_AGE_YEARS: i32 = 120;

/// Accepted input format (ISO calendar date).
const DATE_FORMAT: &str = "%Y-%m-%d";

const MSG_REQUIRED: &str = "birth date is required";
const MSG_UNPARSEABLE: &str = "birth date is not a valid calendar date";
const MSG_FUTURE: &str = "birth date cannot be in the future";
const MSG_TOO_YOUNG: &str = "minimum age is 16 years";
const MSG_TOO_OLD: &str = "maximum age is 120 years";

/// Validate an ISO `YYYY-MM-DD` birth date against an explicit `today`.
///
/// Checks run in order and stop at the first failure: required, parseable,
/// not in the future, age within [16, 120]. Both age bounds are inclusive,
/// so a date exactly 16 (or 120) years before `today` is valid.
///
/// Impossible calendar dates ("2000-02-30") fail the parse step rather than
/// rolling over.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use techmarket_validation::validate_birth_date;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// assert!(validate_birth_date("1990-01-01", today).valid);
/// assert!(!validate_birth_date("2030-01-01", today).valid);
/// ```
pub fn validate_birth_date(raw: &str, today: NaiveDate) -> Validity {
    match parse_and_check(raw, today) {
        Ok(_) => Validity::ok(),
        Err(message) => Validity::invalid(message),
    }
}

/// [`validate_birth_date`] against the local calendar date.
///
/// Because "today" moves, the same input can change validity over real time;
/// tests should prefer the explicit-clock variant.
pub fn validate_birth_date_today(raw: &str) -> Validity {
    validate_birth_date(raw, Local::now().date_naive())
}

/// Whole-year age: the current year's birthday only counts once today's
/// month/day has reached the birth month/day.
fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

fn parse_and_check(raw: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MSG_REQUIRED);
    }

    let birth = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| MSG_UNPARSEABLE)?;

    if birth > today {
        return Err(MSG_FUTURE);
    }

    let age = age_in_years(birth, today);
    if age < MIN_AGE_YEARS {
        return Err(MSG_TOO_YOUNG);
    }
    if age > MAX_AGE_YEARS {
        return Err(MSG_TOO_OLD);
    }

    Ok(birth)
}

/// A birth date that passed all registration rules as of a given day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use techmarket_validation::BirthDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// let birth = BirthDate::new("1990-06-15", today).unwrap();
/// assert_eq!(birth.age_on(today), 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse and validate a birth date against an explicit `today`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthDate` carrying the same message
    /// the flat validator reports.
    pub fn new(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        parse_and_check(raw, today)
            .map(Self)
            .map_err(ValidationError::InvalidBirthDate)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Age in whole years as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_in_years(self.0, today)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordinary_adult_is_valid() {
        assert!(validate_birth_date("1990-01-01", day(2026, 8, 27)).valid);
    }

    #[test]
    fn test_empty_is_required() {
        let v = validate_birth_date("", day(2026, 8, 27));
        assert!(!v.valid);
        assert_eq!(v.message, "birth date is required");
        assert_eq!(validate_birth_date("   ", day(2026, 8, 27)).message, "birth date is required");
    }

    #[test]
    fn test_garbage_is_unparseable() {
        let v = validate_birth_date("not-a-date", day(2026, 8, 27));
        assert_eq!(v.message, "birth date is not a valid calendar date");
        // Impossible dates do not roll over into March.
        assert!(!validate_birth_date("2000-02-30", day(2026, 8, 27)).valid);
    }

    #[test]
    fn test_future_date_rejected() {
        let v = validate_birth_date("2030-01-01", day(2026, 8, 27));
        assert_eq!(v.message, "birth date cannot be in the future");
        // Tomorrow is future; today itself is not (it fails min-age instead).
        assert_eq!(
            validate_birth_date("2026-08-28", day(2026, 8, 27)).message,
            "birth date cannot be in the future"
        );
        assert_eq!(
            validate_birth_date("2026-08-27", day(2026, 8, 27)).message,
            "minimum age is 16 years"
        );
    }

    #[test]
    fn test_sixteenth_birthday_is_inclusive() {
        let today = day(2026, 8, 27);
        // Exactly 16 today: valid.
        assert!(validate_birth_date("2010-08-27", today).valid);
        // Turns 16 tomorrow: one day short.
        assert_eq!(
            validate_birth_date("2010-08-28", today).message,
            "minimum age is 16 years"
        );
    }

    #[test]
    fn test_age_cap_is_inclusive() {
        let today = day(2026, 8, 27);
        // Exactly 120 today: valid.
        assert!(validate_birth_date("1906-08-27", today).valid);
        // 121st birthday already passed.
        assert_eq!(
            validate_birth_date("1905-08-27", today).message,
            "maximum age is 120 years"
        );
        // Still 120 until the birthday comes around.
        assert!(validate_birth_date("1905-12-31", today).valid);
    }

    #[test]
    fn test_birthday_not_counted_until_reached() {
        let birth = day(1990, 8, 28);
        assert_eq!(age_in_years(birth, day(2026, 8, 27)), 35);
        assert_eq!(age_in_years(birth, day(2026, 8, 28)), 36);
        assert_eq!(age_in_years(birth, day(2026, 8, 29)), 36);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = day(2008, 2, 29);
        // In a non-leap year the birthday counts from March 1.
        assert_eq!(age_in_years(birth, day(2026, 2, 28)), 17);
        assert_eq!(age_in_years(birth, day(2026, 3, 1)), 18);
    }

    #[test]
    fn test_today_wrapper_agrees_with_explicit_clock() {
        // A date valid for any plausible wall clock; the wrapper must match
        // the explicit-clock variant evaluated at the local date.
        let raw = "1990-01-01";
        assert_eq!(
            validate_birth_date_today(raw),
            validate_birth_date(raw, Local::now().date_naive())
        );
        assert!(validate_birth_date_today(raw).valid);
        assert!(!validate_birth_date_today("9999-01-01").valid);
    }

    #[test]
    fn test_birth_date_value_object() {
        let today = day(2026, 8, 27);
        let birth = BirthDate::new("1990-06-15", today).unwrap();
        assert_eq!(birth.date(), day(1990, 6, 15));
        assert_eq!(birth.age_on(today), 36);
        assert_eq!(format!("{}", birth), "1990-06-15");

        let err = BirthDate::new("2030-01-01", today).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidBirthDate("birth date cannot be in the future")
        );
    }
}
