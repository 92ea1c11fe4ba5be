//! Hire date parsing and formatting
//!
//! Dates travel as `DD-MM-YYYY` text at the boundary and as
//! `chrono::NaiveDate` everywhere else.

use chrono::NaiveDate;

use crate::errors::{RecordError, RecordResult};

/// Display/input format for hire dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Earliest accepted hire date
pub const HIRE_DATE_FLOOR: (i32, u32, u32) = (1907, 1, 1);

/// The historical floor as a date
pub fn hire_date_floor() -> NaiveDate {
    let (year, month, day) = HIRE_DATE_FLOOR;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Parse a `DD-MM-YYYY` date. Out-of-range components are rejected rather
/// than rolled over into the next month or year.
pub fn parse_date(input: &str) -> RecordResult<NaiveDate> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(RecordError::invalid_date(
            "Invalid date format. The date should be in 'DD-MM-YYYY' format.",
        ));
    }

    let not_numeric =
        |_| RecordError::invalid_date("Make sure you're inputting numeric date values.");

    let day = parts[0].trim().parse::<u32>().map_err(not_numeric)?;
    let month = parts[1].trim().parse::<u32>().map_err(not_numeric)?;
    let year = parts[2].trim().parse::<i32>().map_err(not_numeric)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RecordError::invalid_date(format!("'{}' is not a calendar date", input.trim()))
    })
}

/// Format a date as `DD-MM-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Check a hire date against today and the historical floor
pub fn validate_hire_date(hire_date: NaiveDate, today: NaiveDate) -> RecordResult<()> {
    if hire_date > today {
        return Err(RecordError::invalid_date(
            "Invalid hire date. The date cannot be in the future.",
        ));
    }
    check_hire_floor(hire_date)
}

/// Check a hire date against the historical floor only
pub fn check_hire_floor(hire_date: NaiveDate) -> RecordResult<()> {
    if hire_date < hire_date_floor() {
        return Err(RecordError::invalid_date(
            "Invalid hire date. The date cannot be earlier than 1907.",
        ));
    }
    Ok(())
}
