//! Annual recurrence resolution.
//!
//! A repeating tracked date keeps only its month and day. Against a reference
//! day it resolves to the soonest occurrence that is not in the past, with
//! the reference day itself counting as an occurrence.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Where a Feb 29 anniversary lands in a year without Feb 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Clamp to the last day of February.
    #[default]
    Feb28,
    /// Roll over to the first day of March.
    Mar1,
}

/// Place `month`/`day` in `year`, applying `policy` when the day does not
/// exist in that year.
///
/// Returns `None` only when `year` is outside chrono's representable range.
pub fn project_onto_year(
    month: u32,
    day: u32,
    year: i32,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            match policy {
                LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
                LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
            }
        } else {
            None
        }
    })
}

/// Resolve the date to diff against.
///
/// Non-repeating targets pass through untouched. Repeating targets are
/// projected onto the reference year; a projection that already passed moves
/// to the following year. Next-year projection starts again from the stored
/// month/day, so a Feb 29 anniversary clamped this year is Feb 29 again in a
/// leap year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use day_engine::recurrence::{resolve_occurrence, LeapDayPolicy};
///
/// let christmas = NaiveDate::from_ymd_opt(2000, 12, 25).unwrap();
/// let today = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();
/// let next = resolve_occurrence(christmas, true, today, LeapDayPolicy::default());
/// assert_eq!(next, NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
/// ```
pub fn resolve_occurrence(
    target: NaiveDate,
    repeats: bool,
    reference: NaiveDate,
    policy: LeapDayPolicy,
) -> NaiveDate {
    if !repeats {
        return target;
    }

    let (month, day) = (target.month(), target.day());
    let Some(this_year) = project_onto_year(month, day, reference.year(), policy) else {
        log::warn!("cannot project {target} onto year {}", reference.year());
        return target;
    };

    let resolved = if this_year == reference {
        reference
    } else if this_year < reference {
        match project_onto_year(month, day, reference.year() + 1, policy) {
            Some(next_year) => next_year,
            None => {
                log::warn!("cannot project {target} onto year {}", reference.year() + 1);
                this_year
            }
        }
    } else {
        this_year
    };

    log::debug!("resolved repeating {target} against {reference} to {resolved}");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resolve(target: NaiveDate, reference: NaiveDate) -> NaiveDate {
        resolve_occurrence(target, true, reference, LeapDayPolicy::default())
    }

    // ── non-repeating ───────────────────────────────────────────────────

    #[test]
    fn test_non_repeating_passes_through() {
        let target = date(1975, 3, 1);
        let got = resolve_occurrence(target, false, date(2023, 12, 20), LeapDayPolicy::Feb28);
        assert_eq!(got, target);
    }

    // ── repeating ───────────────────────────────────────────────────────

    #[test]
    fn test_upcoming_this_year() {
        assert_eq!(resolve(date(2000, 12, 25), date(2023, 12, 20)), date(2023, 12, 25));
    }

    #[test]
    fn test_anniversary_is_today() {
        assert_eq!(resolve(date(1990, 6, 15), date(2023, 6, 15)), date(2023, 6, 15));
    }

    #[test]
    fn test_passed_wraps_to_next_year() {
        assert_eq!(resolve(date(1990, 6, 15), date(2023, 6, 16)), date(2024, 6, 15));
    }

    #[test]
    fn test_wraps_across_new_year() {
        assert_eq!(resolve(date(2010, 1, 1), date(2023, 12, 31)), date(2024, 1, 1));
    }

    #[test]
    fn test_future_stored_year_is_ignored() {
        // Only month/day matter, even when the stored year is ahead.
        assert_eq!(resolve(date(2030, 3, 10), date(2023, 3, 11)), date(2024, 3, 10));
    }

    // ── leap day ────────────────────────────────────────────────────────

    #[test]
    fn test_leap_day_clamps_to_feb28() {
        let got = resolve_occurrence(date(2000, 2, 29), true, date(2023, 1, 10), LeapDayPolicy::Feb28);
        assert_eq!(got, date(2023, 2, 28));
    }

    #[test]
    fn test_leap_day_rolls_to_mar1() {
        let got = resolve_occurrence(date(2000, 2, 29), true, date(2023, 1, 10), LeapDayPolicy::Mar1);
        assert_eq!(got, date(2023, 3, 1));
    }

    #[test]
    fn test_leap_day_clamped_is_today() {
        let got = resolve_occurrence(date(2000, 2, 29), true, date(2023, 2, 28), LeapDayPolicy::Feb28);
        assert_eq!(got, date(2023, 2, 28));
    }

    #[test]
    fn test_leap_day_wraps_into_leap_year() {
        // Clamped 2023-02-28 has passed; 2024 has a real Feb 29.
        let got = resolve_occurrence(date(2000, 2, 29), true, date(2023, 3, 5), LeapDayPolicy::Feb28);
        assert_eq!(got, date(2024, 2, 29));
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        let got = resolve_occurrence(date(2000, 2, 29), true, date(2024, 2, 1), LeapDayPolicy::Mar1);
        assert_eq!(got, date(2024, 2, 29));
    }

    #[test]
    fn test_project_regular_day_ignores_policy() {
        assert_eq!(project_onto_year(7, 4, 2023, LeapDayPolicy::Mar1), Some(date(2023, 7, 4)));
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        let json = serde_json::to_string(&LeapDayPolicy::Mar1).unwrap();
        assert_eq!(json, "\"mar1\"");
    }
}
