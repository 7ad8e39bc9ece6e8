//! Signed offsets between two calendar days in every supported unit.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Days in the fixed-length year used for the year offset.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Days per week.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Mean Gregorian month, only used if month stepping leaves chrono's range.
const MEAN_DAYS_PER_MONTH: f64 = 365.2425 / 12.0;

/// Offsets from a reference day to a target day, one per unit.
///
/// All values share the sign of `days`, and are exactly `0.0` when `days` is
/// zero. Nothing here is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitOffsets {
    /// Whole calendar days, `target − reference`. The authoritative value.
    pub days: i64,
    /// `days` as a float, for uniform access by [`Unit`].
    pub day: f64,
    /// `days / 7`.
    pub week: f64,
    /// Calendar months, with the partial month as the covered share of that
    /// month's actual length.
    pub month: f64,
    /// `days / 365`.
    pub year: f64,
}

impl UnitOffsets {
    /// Compute all four offsets from `reference` to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_engine::diff::UnitOffsets;
    ///
    /// let jan1 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    /// let mar1 = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
    /// let offsets = UnitOffsets::between(jan1, mar1);
    /// assert_eq!(offsets.days, 59);
    /// assert_eq!(offsets.month, 2.0);
    /// ```
    pub fn between(reference: NaiveDate, target: NaiveDate) -> Self {
        let days = (target - reference).num_days();
        if days == 0 {
            return Self::zero();
        }

        let day = days as f64;
        let month = month_offset(reference, target, days).unwrap_or_else(|| {
            log::warn!(
                "month stepping out of range between {reference} and {target}; using mean month"
            );
            day / MEAN_DAYS_PER_MONTH
        });

        Self {
            days,
            day,
            week: day / DAYS_PER_WEEK,
            month,
            year: day / DAYS_PER_YEAR,
        }
    }

    /// The offsets for a target that is the reference day.
    pub fn zero() -> Self {
        Self {
            days: 0,
            day: 0.0,
            week: 0.0,
            month: 0.0,
            year: 0.0,
        }
    }

    /// The raw offset in `unit`.
    pub fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Day => self.day,
            Unit::Week => self.week,
            Unit::Month => self.month,
            Unit::Year => self.year,
        }
    }
}

/// Step `date` by `n` calendar months, clamping to the end of shorter months.
fn shift_months(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
    if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Whole months from `reference` toward `target`, plus the fraction of the
/// next month step that `target` covers.
///
/// Month steps are always taken from `reference` (never chained), so a
/// reference on the 31st steps to the last day of each shorter month.
fn month_offset(reference: NaiveDate, target: NaiveDate, days: i64) -> Option<f64> {
    let guess = i64::from(target.year() - reference.year()) * 12
        + i64::from(target.month()) - i64::from(reference.month());

    if days > 0 {
        let mut whole = guess;
        let mut anchor = shift_months(reference, whole)?;
        while anchor > target {
            whole -= 1;
            anchor = shift_months(reference, whole)?;
        }
        let next = shift_months(reference, whole + 1)?;
        let covered = (target - anchor).num_days() as f64;
        let span = (next - anchor).num_days() as f64;
        Some(whole as f64 + covered / span)
    } else {
        let mut whole = guess;
        let mut anchor = shift_months(reference, whole)?;
        while anchor < target {
            whole += 1;
            anchor = shift_months(reference, whole)?;
        }
        let prev = shift_months(reference, whole - 1)?;
        let covered = (anchor - target).num_days() as f64;
        let span = (anchor - prev).num_days() as f64;
        Some(whole as f64 - covered / span)
    }
}
