//! The countdown / count-up query over a tracked day.
//!
//! [`compute_offset`] is the entry point for callers holding raw stored
//! records. [`compute_offset_on`] is the same computation over already-parsed
//! dates and cannot fail. Results are recomputed on every call and carry no
//! identity of their own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{parse_calendar_date, reference_or_today};
use crate::diff::UnitOffsets;
use crate::error::DayError;
use crate::recurrence::{resolve_occurrence, LeapDayPolicy};
use crate::unit::Unit;

/// A user-defined day as supplied by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedDate {
    /// ISO 8601 date, optionally with a time that is ignored.
    pub date: String,
    /// Recurs every year on the same month/day.
    #[serde(default)]
    pub repeats: bool,
    /// Preferred display unit.
    #[serde(default)]
    pub unit: Unit,
}

impl TrackedDate {
    pub fn new(date: impl Into<String>, repeats: bool) -> Self {
        Self {
            date: date.into(),
            repeats,
            unit: Unit::default(),
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }
}

/// Whether a day is being counted down to or counted up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The target is today or in the future.
    Down,
    /// The target is in the past.
    Up,
}

impl Direction {
    /// Direction for a signed day count. Zero counts down: the countdown has
    /// reached its end.
    pub fn from_days(days: i64) -> Self {
        if days < 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Options for [`compute_offset_with_options`].
#[derive(Debug, Clone, Default)]
pub struct OffsetOptions {
    /// IANA timezone used to read "today" when no reference is given.
    /// `None` uses the host's local date.
    pub timezone: Option<String>,
    /// Where Feb 29 anniversaries land in non-leap years.
    pub leap_day: LeapDayPolicy,
}

/// The offset of a tracked day relative to a reference day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetResult {
    /// The unit `count` is expressed in.
    pub unit: Unit,
    /// Signed offset in `unit`; positive means the target is ahead.
    pub count: f64,
    /// Signed whole-day offset; the source of sign and zero-ness.
    pub days: i64,
    pub direction: Direction,
    pub is_today: bool,
    /// The reference day the offset was measured from.
    pub reference: NaiveDate,
    /// The occurrence the offset was measured to, after recurrence.
    pub target: NaiveDate,
    /// Offsets in every unit, for side-by-side display.
    pub per_unit_stats: UnitOffsets,
}

/// Compute the offset of `target` in `unit`, against `reference` or today.
///
/// Uses the host's local date for "today" and [`LeapDayPolicy::Feb28`]. For
/// other settings, use [`compute_offset_with_options`].
///
/// # Errors
///
/// Returns [`DayError::InvalidDateFormat`] if the target or reference string
/// is not a calendar date.
///
/// # Examples
///
/// ```
/// use day_engine::{compute_offset, Direction, TrackedDate, Unit};
///
/// let christmas = TrackedDate::new("2000-12-25", true);
/// let result = compute_offset(&christmas, Unit::Day, Some("2023-12-20")).unwrap();
/// assert_eq!(result.count, 5.0);
/// assert_eq!(result.direction, Direction::Down);
/// assert!(!result.is_today);
/// ```
pub fn compute_offset(
    target: &TrackedDate,
    unit: Unit,
    reference: Option<&str>,
) -> Result<OffsetResult, DayError> {
    compute_offset_with_options(target, unit, reference, &OffsetOptions::default())
}

/// Compute the offset of `target` in `unit` with options.
///
/// # Errors
///
/// Returns [`DayError::InvalidDateFormat`] for unparseable dates, or
/// [`DayError::InvalidTimezone`] if `reference` is `None` and
/// `options.timezone` is not a valid IANA timezone.
pub fn compute_offset_with_options(
    target: &TrackedDate,
    unit: Unit,
    reference: Option<&str>,
    options: &OffsetOptions,
) -> Result<OffsetResult, DayError> {
    let target_date = parse_calendar_date(&target.date)?;
    let reference_date = reference_or_today(reference, options.timezone.as_deref())?;

    Ok(compute_offset_on(
        target_date,
        target.repeats,
        unit,
        reference_date,
        options.leap_day,
    ))
}

/// Compute the offset between already-normalized calendar days.
pub fn compute_offset_on(
    target: NaiveDate,
    repeats: bool,
    unit: Unit,
    reference: NaiveDate,
    leap_day: LeapDayPolicy,
) -> OffsetResult {
    let resolved = resolve_occurrence(target, repeats, reference, leap_day);
    let per_unit_stats = UnitOffsets::between(reference, resolved);

    OffsetResult {
        unit,
        count: per_unit_stats.get(unit),
        days: per_unit_stats.days,
        direction: Direction::from_days(per_unit_stats.days),
        is_today: resolved == reference,
        reference,
        target: resolved,
        per_unit_stats,
    }
}
