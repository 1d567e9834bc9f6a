//! Calendar shifts relative to the reference date
//!
//! Month shifts keep the day of month and roll any excess days into the
//! following month, so 2024-01-31 plus one month is 2024-03-02.

use crate::error::GenerationError;
use chrono::{Datelike, Days, NaiveDate};

/// Shift `date` by a signed number of whole months with day rollover
pub fn shift_months(date: NaiveDate, months: i32) -> Result<NaiveDate, GenerationError> {
    let out_of_range = || GenerationError::DateOutOfRange {
        base: date,
        amount: i64::from(months),
        unit: "months",
    };

    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range())?;
    // rem_euclid(12) is always in 0..12
    let month = u32::try_from(total.rem_euclid(12)).map_err(|_| out_of_range())? + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .ok_or_else(out_of_range)
}

/// Move `date` back by a number of calendar days
pub fn days_before(date: NaiveDate, days: u32) -> Result<NaiveDate, GenerationError> {
    date.checked_sub_days(Days::new(u64::from(days)))
        .ok_or(GenerationError::DateOutOfRange {
            base: date,
            amount: -i64::from(days),
            unit: "days",
        })
}
