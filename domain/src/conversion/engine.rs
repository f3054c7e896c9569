//! Conversion formulas

use super::category::UnitCategory;

/// Units per 1 USD
const CURRENCY_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("JPY", 157.25),
    ("GBP", 0.79),
    ("CAD", 1.37),
];

/// Units per 1 meter
const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Kilometers", 0.001),
    ("Miles", 0.000621371),
    ("Feet", 3.28084),
];

fn lookup(table: &[(&str, f64)], unit: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

fn to_celsius(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "Celsius" => Some(value),
        "Fahrenheit" => Some((value - 32.0) * 5.0 / 9.0),
        "Kelvin" => Some(value - 273.15),
        _ => None,
    }
}

fn from_celsius(celsius: f64, unit: &str) -> Option<f64> {
    match unit {
        "Celsius" => Some(celsius),
        "Fahrenheit" => Some(celsius * 9.0 / 5.0 + 32.0),
        "Kelvin" => Some(celsius + 273.15),
        _ => None,
    }
}

/// Convert `value` from one unit to another within `category`.
///
/// Returns `None` when either unit is not part of the family. The result is
/// not rounded.
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> Option<f64> {
    match category {
        UnitCategory::Currency => {
            let rate_from = lookup(CURRENCY_RATES, from)?;
            let rate_to = lookup(CURRENCY_RATES, to)?;
            Some(value / rate_from * rate_to)
        }
        UnitCategory::Temperature => from_celsius(to_celsius(value, from)?, to),
        UnitCategory::Length => {
            let factor_from = lookup(LENGTH_FACTORS, from)?;
            let factor_to = lookup(LENGTH_FACTORS, to)?;
            Some(value / factor_from * factor_to)
        }
    }
}

/// Parse user input as a finite number. Surrounding whitespace is allowed.
pub fn parse_value(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One conversion as typed by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest<'a> {
    pub value: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub category: UnitCategory,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(category: UnitCategory, value: &'a str, from: &'a str, to: &'a str) -> Self {
        Self {
            value,
            from,
            to,
            category,
        }
    }

    /// The formatted result, or an empty string for unusable input
    pub fn evaluate(&self) -> String {
        let Some(value) = parse_value(self.value) else {
            return String::new();
        };
        match convert(self.category, value, self.from, self.to) {
            Some(result) => format!("{:.*}", self.category.decimals(), result),
            None => String::new(),
        }
    }
}
