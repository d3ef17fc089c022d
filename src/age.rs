//! age.rs
//!
//! Calendar-field age arithmetic: the difference between a birthdate and a
//! reference date as whole years, months and days.
//!
//! Chrono has no built-in year/month/day diff, so the borrowing rules are
//! implemented manually:
//!   • day underflow borrows from the month immediately before the
//!     reference date (in the reference date's year)
//!   • month underflow borrows from years
//!   • leap years and varying month lengths are accounted for in the borrow
//!
//! The reference date is always passed in; nothing here reads a clock, so
//! the same inputs always give the same result.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calculated age. Produced fresh by [`age_between`] and never mutated.
///
/// `months` lands in `0..=11` and `days` within a month length for ordinary
/// inputs. The fields stay signed: a day-31 birthdate crossing a shorter
/// borrow month leaves `days` slightly negative (see [`age_between`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Returns the age at `today` for someone born on `birthdate`.
///
/// Callers must ensure `birthdate <= today` (see `input::parse_birthdate`);
/// the fields go negative otherwise.
pub fn age_between(birthdate: NaiveDate, today: NaiveDate) -> Age {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow. The borrow month is the one before `today`'s
    // month, not the one before the birthday anniversary, and a single
    // borrow is taken even when it is shorter than the deficit.
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        // 28–31 depending on month & leap year
        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Age {
        years,
        months,
        days,
    }
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
