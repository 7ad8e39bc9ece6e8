//! # day-engine
//!
//! Deterministic day counting for countdown and anniversary trackers.
//!
//! Given a tracked day (a calendar date plus an annual-repeat flag), a display
//! unit and a reference "today", the engine computes how many days, weeks,
//! months or years away the day is. Repeating days resolve to their next
//! occurrence that is not in the past. All computation is pure; the only
//! clock read is the optional default reference.
//!
//! ## Modules
//!
//! - [`offset`] - the [`compute_offset`] query and its result types
//! - [`recurrence`] - annual recurrence resolution and leap-day policy
//! - [`diff`] - signed day/week/month/year offsets between two days
//! - [`numeric`] - rounding and truncation helpers for display
//! - [`display`] - explicit display policy over offset results
//! - [`calendar`] - date parsing and the default "today"
//! - [`unit`] - display units
//! - [`error`] - Error types

pub mod calendar;
pub mod diff;
pub mod display;
pub mod error;
pub mod numeric;
pub mod offset;
pub mod recurrence;
pub mod unit;

pub use calendar::{parse_calendar_date, today};
pub use diff::UnitOffsets;
pub use display::{DisplayPolicy, Presented, Rounding};
pub use error::DayError;
pub use numeric::{round, truncate};
pub use offset::{
    compute_offset, compute_offset_on, compute_offset_with_options, Direction, OffsetOptions,
    OffsetResult, TrackedDate,
};
pub use recurrence::{resolve_occurrence, LeapDayPolicy};
pub use unit::Unit;
