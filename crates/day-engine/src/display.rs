//! Display policy for offsets.
//!
//! The engine never rounds. A list row or detail view picks a
//! [`DisplayPolicy`] and passes it explicitly; nothing here reads locale or
//! other ambient settings. Turning the presented value into words is left to
//! the localization layer.

use serde::{Deserialize, Serialize};

use crate::numeric::{round, truncate};
use crate::offset::{Direction, OffsetResult};
use crate::unit::Unit;

/// How a fractional offset is cut down to `decimals` places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    Round,
    #[default]
    Truncate,
}

/// Decimal places and rounding mode for displaying an offset.
///
/// The default shows whole units, truncated: 27 days is "3" weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayPolicy {
    pub decimals: i32,
    pub mode: Rounding,
}

/// An offset ready to be localized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presented {
    /// Magnitude after the policy was applied; the sign lives in `direction`.
    pub value: f64,
    pub unit: Unit,
    pub direction: Direction,
    pub is_today: bool,
}

impl DisplayPolicy {
    pub fn new(decimals: i32, mode: Rounding) -> Self {
        Self { decimals, mode }
    }

    /// Apply the policy to a raw value.
    pub fn apply(&self, value: f64) -> f64 {
        match self.mode {
            Rounding::Round => round(value, self.decimals),
            Rounding::Truncate => truncate(value, self.decimals),
        }
    }

    /// Present `result.count` under this policy.
    pub fn present(&self, result: &OffsetResult) -> Presented {
        self.present_in(result, result.unit)
    }

    /// Present the offset of `result` in another unit, e.g. for a detail view
    /// listing all four units side by side.
    pub fn present_in(&self, result: &OffsetResult, unit: Unit) -> Presented {
        Presented {
            value: self.apply(result.per_unit_stats.get(unit).abs()),
            unit,
            direction: result.direction,
            is_today: result.is_today,
        }
    }

    /// Present every unit, smallest first.
    pub fn present_all(&self, result: &OffsetResult) -> [Presented; 4] {
        Unit::ALL.map(|unit| self.present_in(result, unit))
    }
}
