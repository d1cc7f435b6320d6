//! Derived suggestion and schedule models.
//!
//! Suggestions carry no persisted identity. They are pure functions of
//! (pet, rule table, the instant "now") and are recomputed on every query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rule::{RuleCategory, VaccineRule};

/// Suggestion priority, fixed 1:1 with the originating rule category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    /// Mandatory vaccinations
    High,
    /// Recommended vaccinations
    Medium,
    /// Preventative treatments
    Low,
}

impl Priority {
    /// Sort weight; higher sorts first.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// A derived, non-persisted recommendation for one pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccineSuggestion {
    /// The originating rule (synthesized for preventative treatments)
    pub vaccine: VaccineRule,
    /// Fixed reason string for the category
    pub reason: String,
    /// Fixed priority for the category
    pub priority: Priority,
    /// Projected next due date; absent when the frequency text is
    /// unrecognized
    pub due_date: Option<NaiveDate>,
    /// Whether the due date has already passed; always false without a
    /// due date
    pub is_overdue: bool,
    /// Which partition list produced this suggestion
    pub category: RuleCategory,
}

impl VaccineSuggestion {
    /// Has a due date and is not yet past it.
    pub fn is_upcoming(&self) -> bool {
        self.due_date.is_some() && !self.is_overdue
    }
}

/// Aggregated view of one pet's suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccineSchedule {
    /// Pet local ID
    pub pet_id: String,
    /// Pet name (for display without a second lookup)
    pub pet_name: String,
    /// Full prioritized suggestion list
    pub suggestions: Vec<VaccineSuggestion>,
    /// Suggestions already past their due date
    pub overdue_count: usize,
    /// Suggestions with a future due date
    pub upcoming_count: usize,
    /// Earliest non-overdue due date, if any suggestion has one
    pub next_due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_weights_order() {
        assert!(Priority::High.weight() > Priority::Medium.weight());
        assert!(Priority::Medium.weight() > Priority::Low.weight());
    }

    #[test]
    fn test_is_upcoming() {
        let rule = VaccineRule {
            name: "Rabies".into(),
            frequency: "Yearly".into(),
            age_restriction: None,
            description: String::new(),
            side_effects: Vec::new(),
            last_updated: String::new(),
        };

        let mut suggestion = VaccineSuggestion {
            vaccine: rule,
            reason: RuleCategory::Mandatory.reason().into(),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2026, 6, 15),
            is_overdue: false,
            category: RuleCategory::Mandatory,
        };
        assert!(suggestion.is_upcoming());

        suggestion.is_overdue = true;
        assert!(!suggestion.is_upcoming());

        suggestion.is_overdue = false;
        suggestion.due_date = None;
        assert!(!suggestion.is_upcoming());
    }
}
