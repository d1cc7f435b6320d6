//! Vaccine and treatment rule models.

use serde::{Deserialize, Serialize};

use super::suggestion::Priority;

/// Inclusive age gate for a rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeRestriction {
    /// Minimum age in weeks (inclusive)
    pub min_weeks: u32,
    /// Maximum age in years (inclusive); None means unbounded
    pub max_years: Option<u32>,
}

/// Weeks per year used when comparing an age in weeks against `max_years`.
pub const WEEKS_PER_YEAR: u32 = 52;

impl AgeRestriction {
    /// Whether an age in weeks falls inside this gate.
    ///
    /// A `max_years` so large that the week conversion overflows cannot
    /// exclude any representable age, so it behaves as unbounded.
    pub fn permits(&self, age_weeks: u32) -> bool {
        if age_weeks < self.min_weeks {
            return false;
        }
        match self.max_years {
            Some(max_years) => max_years
                .checked_mul(WEEKS_PER_YEAR)
                .map_or(true, |max_weeks| age_weeks <= max_weeks),
            None => true,
        }
    }

    /// A gate that admits every age.
    pub fn unrestricted() -> Self {
        Self {
            min_weeks: 0,
            max_years: None,
        }
    }
}

/// A static vaccine or treatment definition from the rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccineRule {
    /// Vaccine or treatment name
    pub name: String,
    /// Free-text recurrence (e.g., "Yearly", "6 months"); drives the
    /// heuristic due-date projection, not a structured duration
    pub frequency: String,
    /// Age gate; rules missing one are skipped by the builder
    pub age_restriction: Option<AgeRestriction>,
    /// Human-readable description (informational only)
    pub description: String,
    /// Known side effects (informational only)
    pub side_effects: Vec<String>,
    /// When this rule was last revised (informational only)
    pub last_updated: String,
}

/// Preventative treatment source shape.
///
/// Narrower than a full vaccine rule; the builder synthesizes a rule-shaped
/// record from it with empty side effects and no upper age bound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Treatment {
    /// Treatment name
    pub name: String,
    /// Free-text recurrence, same projection rules as vaccines
    pub frequency: String,
    /// Human-readable description
    pub description: String,
    /// Minimum age in weeks; defaults to 0 when absent from the table
    #[serde(default)]
    pub min_weeks: u32,
}

impl Treatment {
    /// Synthesize a full rule-shaped record from this treatment.
    pub fn to_rule(&self) -> VaccineRule {
        VaccineRule {
            name: self.name.clone(),
            frequency: self.frequency.clone(),
            age_restriction: Some(AgeRestriction {
                min_weeks: self.min_weeks,
                max_years: None,
            }),
            description: self.description.clone(),
            side_effects: Vec::new(),
            last_updated: String::new(),
        }
    }
}

/// Which list a rule came from within its schema partition.
///
/// The category fixes both the priority and the reason string; neither is
/// independently settable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleCategory {
    /// Legally required vaccinations
    Mandatory,
    /// Recommended for the pet's health
    Recommended,
    /// Ongoing preventative treatments
    Preventative,
}

impl RuleCategory {
    /// Fixed reason string attached to suggestions from this category.
    pub fn reason(&self) -> &'static str {
        match self {
            RuleCategory::Mandatory => "Required by law",
            RuleCategory::Recommended => "Recommended for optimal health",
            RuleCategory::Preventative => "Preventive care for long-term health",
        }
    }

    /// Fixed priority for suggestions from this category.
    pub fn priority(&self) -> Priority {
        match self {
            RuleCategory::Mandatory => Priority::High,
            RuleCategory::Recommended => Priority::Medium,
            RuleCategory::Preventative => Priority::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_restriction_lower_bound() {
        let gate = AgeRestriction {
            min_weeks: 12,
            max_years: None,
        };
        assert!(!gate.permits(11));
        assert!(gate.permits(12));
        assert!(gate.permits(500));
    }

    #[test]
    fn test_age_restriction_upper_bound() {
        let gate = AgeRestriction {
            min_weeks: 8,
            max_years: Some(10),
        };
        // 500 weeks is about 9.6 years, inside a 10-year cap (520 weeks)
        assert!(gate.permits(500));
        assert!(gate.permits(520));
        assert!(!gate.permits(521));

        let tighter = AgeRestriction {
            min_weeks: 8,
            max_years: Some(9),
        };
        // 9 years = 468 weeks, so 500 falls outside
        assert!(!tighter.permits(500));
    }

    #[test]
    fn test_extreme_max_years_acts_as_unbounded() {
        // Loaded tables can carry arbitrary values; a cap whose week
        // conversion overflows must not panic and cannot exclude anything.
        let gate = AgeRestriction {
            min_weeks: 8,
            max_years: Some(u32::MAX),
        };
        assert!(gate.permits(100));
        assert!(gate.permits(u32::MAX));
        assert!(!gate.permits(7));
    }

    #[test]
    fn test_unrestricted_permits_everything() {
        let gate = AgeRestriction::unrestricted();
        assert!(gate.permits(0));
        assert!(gate.permits(u32::MAX));
    }

    #[test]
    fn test_treatment_to_rule() {
        let treatment = Treatment {
            name: "Heartworm Prevention".into(),
            frequency: "Monthly".into(),
            description: "Year-round heartworm preventative".into(),
            min_weeks: 8,
        };

        let rule = treatment.to_rule();
        assert_eq!(rule.name, "Heartworm Prevention");
        assert_eq!(rule.frequency, "Monthly");
        assert!(rule.side_effects.is_empty());
        assert_eq!(
            rule.age_restriction,
            Some(AgeRestriction {
                min_weeks: 8,
                max_years: None,
            })
        );
    }

    #[test]
    fn test_treatment_min_weeks_defaults_to_zero() {
        let treatment: Treatment = serde_json::from_str(
            r#"{"name": "Flea Prevention", "frequency": "Monthly", "description": "Topical"}"#,
        )
        .unwrap();
        assert_eq!(treatment.min_weeks, 0);
    }

    #[test]
    fn test_category_mappings_are_fixed() {
        assert_eq!(RuleCategory::Mandatory.priority(), Priority::High);
        assert_eq!(RuleCategory::Recommended.priority(), Priority::Medium);
        assert_eq!(RuleCategory::Preventative.priority(), Priority::Low);

        assert_eq!(RuleCategory::Mandatory.reason(), "Required by law");
        assert_eq!(
            RuleCategory::Recommended.reason(),
            "Recommended for optimal health"
        );
        assert_eq!(
            RuleCategory::Preventative.reason(),
            "Preventive care for long-term health"
        );
    }
}
