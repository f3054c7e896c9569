//! Unit families

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A family of convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Currency,
    Temperature,
    Length,
}

impl UnitCategory {
    pub fn all() -> [UnitCategory; 3] {
        [
            UnitCategory::Currency,
            UnitCategory::Temperature,
            UnitCategory::Length,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Currency => "currency",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Length => "length",
        }
    }

    /// Units in display order; the order drives target reassignment
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            UnitCategory::Currency => &["USD", "EUR", "JPY", "GBP", "CAD"],
            UnitCategory::Temperature => &["Celsius", "Fahrenheit", "Kelvin"],
            UnitCategory::Length => &["Meters", "Kilometers", "Miles", "Feet"],
        }
    }

    /// Source and target a fresh panel starts with
    pub fn default_pair(&self) -> (&'static str, &'static str) {
        match self {
            UnitCategory::Currency => ("USD", "EUR"),
            UnitCategory::Temperature => ("Celsius", "Fahrenheit"),
            UnitCategory::Length => ("Meters", "Feet"),
        }
    }

    /// Decimal places in a formatted result
    pub fn decimals(&self) -> usize {
        match self {
            UnitCategory::Currency | UnitCategory::Temperature => 2,
            UnitCategory::Length => 3,
        }
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Disclaimer shown under the result, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            UnitCategory::Currency => {
                Some("Exchange rates are indicative and may not be real-time.")
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "currency" => Ok(UnitCategory::Currency),
            "temperature" | "temp" => Ok(UnitCategory::Temperature),
            "length" => Ok(UnitCategory::Length),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairs_are_distinct_members() {
        for category in UnitCategory::all() {
            let (from, to) = category.default_pair();
            assert_ne!(from, to);
            assert!(category.has_unit(from));
            assert!(category.has_unit(to));
        }
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Length".parse::<UnitCategory>(), Ok(UnitCategory::Length));
        assert_eq!("temp".parse::<UnitCategory>(), Ok(UnitCategory::Temperature));
        assert!("volume".parse::<UnitCategory>().is_err());
    }

    #[test]
    fn test_only_currency_has_notice() {
        assert!(UnitCategory::Currency.notice().is_some());
        assert!(UnitCategory::Length.notice().is_none());
    }
}
