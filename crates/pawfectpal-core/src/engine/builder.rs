//! Per-rule suggestion builder.
//!
//! Transforms one rule plus the pet's age into zero or one suggestion.
//! Ineligible and malformed rules produce nothing; they never produce an
//! error, so one bad record cannot break the rest of the computation.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{RuleCategory, Treatment, VaccineRule, VaccineSuggestion};

use super::frequency::project_due_date;

/// Build a suggestion from one rule, or nothing if the rule does not apply.
///
/// Rules missing their age restriction are malformed static data; they are
/// skipped with a warning and the computation continues.
pub fn build_suggestion(
    rule: &VaccineRule,
    category: RuleCategory,
    age_weeks: u32,
    today: NaiveDate,
) -> Option<VaccineSuggestion> {
    let Some(restriction) = rule.age_restriction else {
        warn!(rule = %rule.name, "skipping rule without an age restriction");
        return None;
    };
    if !restriction.permits(age_weeks) {
        return None;
    }

    let due_date = project_due_date(&rule.frequency, today);
    let is_overdue = due_date.is_some_and(|due| due < today);

    Some(VaccineSuggestion {
        vaccine: rule.clone(),
        reason: category.reason().into(),
        priority: category.priority(),
        due_date,
        is_overdue,
        category,
    })
}

/// Build a suggestion for a preventative treatment.
///
/// The treatment's narrower source shape is first synthesized into a
/// rule-shaped record (empty side effects, no upper age bound).
pub fn build_treatment_suggestion(
    treatment: &Treatment,
    age_weeks: u32,
    today: NaiveDate,
) -> Option<VaccineSuggestion> {
    let rule = treatment.to_rule();
    build_suggestion(&rule, RuleCategory::Preventative, age_weeks, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRestriction, Priority};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn rabies() -> VaccineRule {
        VaccineRule {
            name: "Rabies".into(),
            frequency: "Yearly".into(),
            age_restriction: Some(AgeRestriction {
                min_weeks: 12,
                max_years: None,
            }),
            description: "Core rabies vaccination".into(),
            side_effects: vec!["Lethargy".into()],
            last_updated: "2025-01-15".into(),
        }
    }

    #[test]
    fn test_eligible_rule_builds_suggestion() {
        let suggestion =
            build_suggestion(&rabies(), RuleCategory::Mandatory, 20, today()).unwrap();

        assert_eq!(suggestion.vaccine.name, "Rabies");
        assert_eq!(suggestion.priority, Priority::High);
        assert_eq!(suggestion.reason, "Required by law");
        assert_eq!(suggestion.category, RuleCategory::Mandatory);
        assert_eq!(
            suggestion.due_date,
            NaiveDate::from_ymd_opt(2026, 6, 15)
        );
        assert!(!suggestion.is_overdue);
    }

    #[test]
    fn test_under_minimum_age_yields_nothing() {
        assert!(build_suggestion(&rabies(), RuleCategory::Mandatory, 11, today()).is_none());
        // Inclusive lower bound
        assert!(build_suggestion(&rabies(), RuleCategory::Mandatory, 12, today()).is_some());
    }

    #[test]
    fn test_over_maximum_age_yields_nothing() {
        let mut rule = rabies();
        rule.age_restriction = Some(AgeRestriction {
            min_weeks: 8,
            max_years: Some(9),
        });
        // 500 weeks > 9 * 52 = 468
        assert!(build_suggestion(&rule, RuleCategory::Mandatory, 500, today()).is_none());

        rule.age_restriction = Some(AgeRestriction {
            min_weeks: 8,
            max_years: Some(10),
        });
        // 500 weeks <= 10 * 52 = 520
        assert!(build_suggestion(&rule, RuleCategory::Mandatory, 500, today()).is_some());
    }

    #[test]
    fn test_missing_age_restriction_is_skipped() {
        let mut rule = rabies();
        rule.age_restriction = None;
        assert!(build_suggestion(&rule, RuleCategory::Mandatory, 20, today()).is_none());
    }

    #[test]
    fn test_unparseable_frequency_has_no_due_date() {
        let mut rule = rabies();
        rule.frequency = "3 weeks".into();
        let suggestion =
            build_suggestion(&rule, RuleCategory::Mandatory, 20, today()).unwrap();
        assert!(suggestion.due_date.is_none());
        assert!(!suggestion.is_overdue);
    }

    #[test]
    fn test_treatment_suggestion_defaults() {
        let treatment = Treatment {
            name: "Heartworm Prevention".into(),
            frequency: "Monthly".into(),
            description: "Year-round heartworm preventative".into(),
            min_weeks: 0,
        };

        let suggestion = build_treatment_suggestion(&treatment, 0, today()).unwrap();
        assert_eq!(suggestion.priority, Priority::Low);
        assert_eq!(suggestion.reason, "Preventive care for long-term health");
        assert_eq!(suggestion.category, RuleCategory::Preventative);
        assert!(suggestion.vaccine.side_effects.is_empty());
        assert_eq!(
            suggestion.due_date,
            NaiveDate::from_ymd_opt(2025, 7, 15)
        );
    }

    #[test]
    fn test_treatment_minimum_age_still_gates() {
        let treatment = Treatment {
            name: "Flea & Tick Prevention".into(),
            frequency: "Monthly".into(),
            description: "Topical parasite preventative".into(),
            min_weeks: 8,
        };
        assert!(build_treatment_suggestion(&treatment, 7, today()).is_none());
        assert!(build_treatment_suggestion(&treatment, 8, today()).is_some());
    }
}
