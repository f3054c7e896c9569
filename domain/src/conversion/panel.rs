//! Conversion panel state

use super::category::UnitCategory;
use super::engine::ConversionRequest;

/// Input state of one conversion panel
///
/// Keeps source and target distinct: whenever they would coincide the target
/// moves to the first other unit of the family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPanel {
    category: UnitCategory,
    input: String,
    from: &'static str,
    to: &'static str,
}

impl ConversionPanel {
    pub fn new(category: UnitCategory) -> Self {
        let (from, to) = category.default_pair();
        Self {
            category,
            input: "1".to_string(),
            from,
            to,
        }
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> &'static str {
        self.from
    }

    pub fn to_unit(&self) -> &'static str {
        self.to
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Change the source unit. Unknown units are ignored.
    pub fn set_from(&mut self, unit: &str) -> bool {
        let Some(unit) = self.resolve(unit) else {
            return false;
        };
        self.from = unit;
        self.keep_distinct();
        true
    }

    /// Change the target unit. Unknown units are ignored.
    pub fn set_to(&mut self, unit: &str) -> bool {
        let Some(unit) = self.resolve(unit) else {
            return false;
        };
        self.to = unit;
        self.keep_distinct();
        true
    }

    /// Units selectable as target: every unit except the source
    pub fn target_choices(&self) -> Vec<&'static str> {
        self.category
            .units()
            .iter()
            .copied()
            .filter(|u| *u != self.from)
            .collect()
    }

    /// Formatted result for the current state (empty when input is unusable)
    pub fn output(&self) -> String {
        ConversionRequest::new(self.category, &self.input, self.from, self.to).evaluate()
    }

    fn resolve(&self, unit: &str) -> Option<&'static str> {
        self.category
            .units()
            .iter()
            .copied()
            .find(|u| u.eq_ignore_ascii_case(unit.trim()))
    }

    fn keep_distinct(&mut self) {
        if self.from == self.to
            && let Some(first) = self.target_choices().first()
        {
            self.to = *first;
        }
    }
}
