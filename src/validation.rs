//! input validation for principal, dates and EMI entries
//!
//! Everything here runs before the engine is invoked. The engine itself
//! assumes well-formed input; these functions turn raw user text into
//! [`Money`] and [`NaiveDate`] values or a message fit to show the user.

use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// user-facing validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount greater than 0.")]
    InvalidAmount,

    #[error("Please enter a valid EMI amount greater than 0.")]
    InvalidEmiAmount,

    #[error("Please fill in all date fields")]
    MissingDateField,

    #[error("Day must be between 1 and 31")]
    DayOutOfRange,

    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,

    #[error("Please enter a valid year")]
    YearOutOfRange,

    #[error("Invalid date (e.g., 30 Feb doesn't exist)")]
    NonexistentDate,

    #[error("Unrecognised date '{input}', use DD/MM/YYYY or YYYY-MM-DD")]
    UnrecognisedDate { input: String },

    #[error("Unrecognised EMI '{input}', use DATE:AMOUNT")]
    MalformedEmi { input: String },

    #[error("EMI Date: {0}")]
    EmiDate(Box<ValidationError>),
}

/// validate the principal
pub fn validate_amount(raw: &str) -> Result<Money, ValidationError> {
    parse_positive(raw).ok_or(ValidationError::InvalidAmount)
}

/// validate a single EMI amount
pub fn validate_emi_amount(raw: &str) -> Result<Money, ValidationError> {
    parse_positive(raw).ok_or(ValidationError::InvalidEmiAmount)
}

fn parse_positive(raw: &str) -> Option<Money> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Money>()
        .ok()
        .filter(|amount| amount.is_positive())
}

/// split day / month / year inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFields {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateFields {
    /// non-digit characters are dropped from every field
    pub fn new(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: digits_only(day),
            month: digits_only(month),
            year: digits_only(year),
        }
    }

    pub fn validate(&self) -> Result<NaiveDate, ValidationError> {
        if self.day.is_empty() || self.month.is_empty() || self.year.is_empty() {
            return Err(ValidationError::MissingDateField);
        }

        let day = self
            .day
            .parse::<u32>()
            .ok()
            .filter(|d| (1..=31).contains(d))
            .ok_or(ValidationError::DayOutOfRange)?;

        let month = self
            .month
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(ValidationError::MonthOutOfRange)?;

        let year = self
            .year
            .parse::<i32>()
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(ValidationError::YearOutOfRange)?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::NonexistentDate)
    }
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// parse `YYYY-MM-DD`, `DD/MM/YYYY` or `DD-MM-YYYY`
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    let unrecognised = || ValidationError::UnrecognisedDate {
        input: trimmed.to_string(),
    };

    let separator = if trimmed.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = trimmed.split(separator).collect();
    if parts.len() != 3 {
        return Err(unrecognised());
    }

    let fields = if separator == '-' && parts[0].len() == 4 {
        DateFields::new(parts[2], parts[1], parts[0])
    } else if parts[2].len() == 4 {
        DateFields::new(parts[0], parts[1], parts[2])
    } else {
        return Err(unrecognised());
    };

    fields.validate()
}

/// parse a `DATE:AMOUNT` EMI entry
pub fn parse_emi(raw: &str) -> Result<(NaiveDate, Money), ValidationError> {
    let (date, amount) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| ValidationError::MalformedEmi {
            input: raw.trim().to_string(),
        })?;

    let date = parse_date(date).map_err(|e| ValidationError::EmiDate(Box::new(e)))?;
    let amount = validate_emi_amount(amount)?;
    Ok((date, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_amount_validation() {
        assert_eq!(validate_amount("100000").unwrap(), Money::from_major(100_000));
        assert_eq!(validate_amount(" 2500.50 ").unwrap().as_decimal(), dec!(2500.50));
        assert_eq!(validate_amount(""), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount("0"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount("-10"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount("abc"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_emi_amount("0"), Err(ValidationError::InvalidEmiAmount));
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(DateFields::new("28", "07", "2025").validate(), Ok(date(2025, 7, 28)));
        assert_eq!(DateFields::new("1", "2", "2024").validate(), Ok(date(2024, 2, 1)));
        assert_eq!(DateFields::new("2a9", "0x2", "2024").validate(), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn test_split_field_errors_in_order() {
        assert_eq!(DateFields::new("", "07", "2025").validate(), Err(ValidationError::MissingDateField));
        assert_eq!(DateFields::new("32", "13", "1800").validate(), Err(ValidationError::DayOutOfRange));
        assert_eq!(DateFields::new("0", "07", "2025").validate(), Err(ValidationError::DayOutOfRange));
        assert_eq!(DateFields::new("10", "13", "1800").validate(), Err(ValidationError::MonthOutOfRange));
        assert_eq!(DateFields::new("10", "12", "1899").validate(), Err(ValidationError::YearOutOfRange));
        assert_eq!(DateFields::new("10", "12", "2101").validate(), Err(ValidationError::YearOutOfRange));
    }

    #[test]
    fn test_nonexistent_calendar_dates() {
        assert_eq!(DateFields::new("30", "02", "2025").validate(), Err(ValidationError::NonexistentDate));
        assert_eq!(DateFields::new("29", "02", "2025").validate(), Err(ValidationError::NonexistentDate));
        assert_eq!(DateFields::new("31", "04", "2025").validate(), Err(ValidationError::NonexistentDate));
        assert_eq!(
            ValidationError::NonexistentDate.to_string(),
            "Invalid date (e.g., 30 Feb doesn't exist)"
        );
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2025-01-15"), Ok(date(2025, 1, 15)));
        assert_eq!(parse_date("15/01/2025"), Ok(date(2025, 1, 15)));
        assert_eq!(parse_date("15-01-2025"), Ok(date(2025, 1, 15)));
        assert_eq!(parse_date("2025-02-30"), Err(ValidationError::NonexistentDate));
        assert!(matches!(parse_date("15.01.2025"), Err(ValidationError::UnrecognisedDate { .. })));
        assert!(matches!(parse_date("15/01/25"), Err(ValidationError::UnrecognisedDate { .. })));
    }

    #[test]
    fn test_parse_emi() {
        assert_eq!(
            parse_emi("15/01/2025:20000"),
            Ok((date(2025, 1, 15), Money::from_major(20_000)))
        );
        assert_eq!(parse_emi("2025-01-15:0"), Err(ValidationError::InvalidEmiAmount));
        assert!(matches!(parse_emi("2025-01-15"), Err(ValidationError::MalformedEmi { .. })));

        let err = parse_emi("30/02/2025:100").unwrap_err();
        assert_eq!(err.to_string(), "EMI Date: Invalid date (e.g., 30 Feb doesn't exist)");
    }
}
