//! Conditional Math Answer Fields
//!
//! The "units given" radios only make sense once units are entered, and the
//! accuracy degree only for inexact accuracy kinds.

use crate::models::MathAnswerSetup;

const EXACT: &str = "exact";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MathAnswerFields {
    pub units: String,
    units_focused: bool,
    pub units_given: Option<bool>,
    pub accuracy: String,
    pub accuracy_degree: String,
}

impl MathAnswerFields {
    pub fn from_setup(setup: &MathAnswerSetup) -> Self {
        Self {
            units: setup.units.clone(),
            units_focused: false,
            units_given: setup.units_given,
            accuracy: setup.accuracy.clone(),
            accuracy_degree: setup.accuracy_degree.clone(),
        }
    }

    pub fn units_given_visible(&self) -> bool {
        self.units_focused || !self.units.is_empty()
    }

    pub fn accuracy_degree_visible(&self) -> bool {
        !self.accuracy.is_empty() && self.accuracy != EXACT
    }

    pub fn focus_units(&mut self) {
        self.units_focused = true;
    }

    /// Leaving an empty units field hides and clears the radios
    pub fn blur_units(&mut self) {
        self.units_focused = false;
        if self.units.is_empty() {
            self.units_given = None;
        }
    }

    pub fn set_units(&mut self, units: impl Into<String>) {
        self.units = units.into();
    }

    /// Switching to an exact (or no) accuracy clears the degree
    pub fn set_accuracy(&mut self, accuracy: impl Into<String>) {
        self.accuracy = accuracy.into();
        if !self.accuracy_degree_visible() {
            self.accuracy_degree.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_visibility_from_values() {
        let empty = MathAnswerFields::from_setup(&MathAnswerSetup::default());
        assert!(!empty.units_given_visible());
        assert!(!empty.accuracy_degree_visible());

        let filled = MathAnswerFields::from_setup(&MathAnswerSetup {
            units: "m/s".into(),
            units_given: Some(true),
            accuracy: "decimal_places".into(),
            accuracy_degree: "2".into(),
        });
        assert!(filled.units_given_visible());
        assert!(filled.accuracy_degree_visible());
    }

    #[test]
    fn test_units_focus_cycle() {
        let mut fields = MathAnswerFields::default();
        fields.focus_units();
        assert!(fields.units_given_visible());
        fields.units_given = Some(false);

        fields.blur_units();
        assert!(!fields.units_given_visible());
        assert_eq!(fields.units_given, None);

        fields.focus_units();
        fields.set_units("kg");
        fields.units_given = Some(true);
        fields.blur_units();
        assert!(fields.units_given_visible());
        assert_eq!(fields.units_given, Some(true));
    }

    #[test]
    fn test_exact_accuracy_clears_degree() {
        let mut fields = MathAnswerFields::default();
        fields.set_accuracy("significant_figures");
        fields.accuracy_degree = "3".into();
        assert!(fields.accuracy_degree_visible());

        fields.set_accuracy("exact");
        assert!(!fields.accuracy_degree_visible());
        assert!(fields.accuracy_degree.is_empty());

        fields.accuracy_degree = "1".into();
        fields.set_accuracy("");
        assert!(fields.accuracy_degree.is_empty());
    }
}
