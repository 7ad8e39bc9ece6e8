//! Display units for tracked days.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DayError;

/// The unit a tracked day is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Every unit, in ascending size.
    pub const ALL: [Unit; 4] = [Unit::Day, Unit::Week, Unit::Month, Unit::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; singular and plural forms are both accepted.
impl FromStr for Unit {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(lower.as_str());
        match singular {
            "day" | "d" => Ok(Unit::Day),
            "week" | "w" => Ok(Unit::Week),
            "month" | "m" => Ok(Unit::Month),
            "year" | "y" => Ok(Unit::Year),
            _ => Err(DayError::InvalidUnit(format!("'{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("day".parse::<Unit>().unwrap(), Unit::Day);
        assert_eq!("Weeks".parse::<Unit>().unwrap(), Unit::Week);
        assert_eq!(" MONTH ".parse::<Unit>().unwrap(), Unit::Month);
        assert_eq!("y".parse::<Unit>().unwrap(), Unit::Year);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = "fortnight".parse::<Unit>().unwrap_err();
        assert!(err.to_string().contains("Invalid unit"), "got: {err}");
    }

    #[test]
    fn test_display_round_trips() {
        for unit in Unit::ALL {
            assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Month).unwrap(), "\"month\"");
        let unit: Unit = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(unit, Unit::Year);
    }
}
