//! Birthdate validation. Runs before any age arithmetic; the reference date
//! is injected by the caller rather than read from a clock.

use chrono::NaiveDate;
use thiserror::Error;

/// Ways a user-supplied birthdate can be rejected. Every variant is an
/// expected input problem for the caller to surface, not a program fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthdateError {
    #[error("no date was given")]
    Empty,

    #[error("`{raw}` is not a YYYY-MM-DD calendar date")]
    InvalidFormat { raw: String },

    #[error("{birthdate} is after the reference date {today}")]
    Future {
        birthdate: NaiveDate,
        today: NaiveDate,
    },
}

/// Parses a `YYYY-MM-DD` date string. Surrounding whitespace is allowed;
/// an empty or whitespace-only string is [`BirthdateError::Empty`].
pub fn parse_date(raw: &str) -> Result<NaiveDate, BirthdateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BirthdateError::Empty);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| BirthdateError::InvalidFormat {
        raw: trimmed.to_string(),
    })
}

/// Validates a birthdate against the reference date `today`.
///
/// Dates strictly after `today` are rejected; `today` itself is accepted and
/// gives a zero age downstream.
pub fn parse_birthdate(raw: &str, today: NaiveDate) -> Result<NaiveDate, BirthdateError> {
    let birthdate = parse_date(raw)?;
    if birthdate > today {
        return Err(BirthdateError::Future { birthdate, today });
    }
    Ok(birthdate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn empty_and_whitespace_input_rejected() {
        let today = ymd(2024, 6, 10);
        assert_eq!(parse_birthdate("", today), Err(BirthdateError::Empty));
        assert_eq!(parse_birthdate("   ", today), Err(BirthdateError::Empty));
    }

    #[test]
    fn malformed_input_rejected() {
        let today = ymd(2024, 6, 10);
        for raw in ["yesterday", "15/05/1990", "1990-13-01", "1990-05", "1990-05-15x"] {
            match parse_birthdate(raw, today) {
                Err(BirthdateError::InvalidFormat { .. }) => {}
                other => panic!("expected InvalidFormat for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn impossible_calendar_dates_rejected() {
        let today = ymd(2024, 6, 10);
        // Feb 30 never exists; Feb 29 only in leap years
        assert!(parse_birthdate("2023-02-30", today).is_err());
        assert!(parse_birthdate("2023-02-29", today).is_err());
        assert_eq!(parse_birthdate("2024-02-29", today), Ok(ymd(2024, 2, 29)));
    }

    #[test]
    fn future_dates_rejected_strictly() {
        let today = ymd(2024, 6, 10);
        assert_eq!(
            parse_birthdate("2024-06-11", today),
            Err(BirthdateError::Future {
                birthdate: ymd(2024, 6, 11),
                today,
            })
        );
        // same day is fine (zero age), and so is the day before
        assert_eq!(parse_birthdate("2024-06-10", today), Ok(today));
        assert_eq!(parse_birthdate("2024-06-09", today), Ok(ymd(2024, 6, 9)));
    }

    #[test]
    fn surrounding_whitespace_tolerated() {
        let today = ymd(2024, 6, 10);
        assert_eq!(
            parse_birthdate(" 1990-05-15\n", today),
            Ok(ymd(1990, 5, 15))
        );
    }

    #[test]
    fn error_messages_name_the_offender() {
        let today = ymd(2024, 6, 10);
        let err = parse_birthdate("not-a-date", today).unwrap_err();
        assert!(err.to_string().contains("not-a-date"));

        let err = parse_birthdate("2030-01-01", today).unwrap_err();
        assert!(err.to_string().contains("2030-01-01"));
    }
}
