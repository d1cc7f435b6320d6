//! Static vaccine rule tables.
//!
//! Rules are partitioned by species and life stage (puppies/kittens vs.
//! adults), with each partition holding mandatory vaccines, recommended
//! vaccines, and preventative treatments. Tables are supplied as the
//! built-in veterinary default or loaded from JSON at startup; loading is
//! the only fallible entry point in the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AgeRestriction, Treatment, VaccineRule};

/// Age in weeks below which a pet uses the young-animal partition.
///
/// Hardcoded at one year for both species; veterinary guidance differs by
/// species and breed, but the schedule tables are authored against this
/// threshold.
pub const YOUNG_AGE_THRESHOLD_WEEKS: u32 = 52;

/// Rule table loading errors.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid rule table JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rule table has no rules in any partition")]
    Empty,
}

/// One species/life-stage partition of the rule table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchemaPartition {
    /// Legally required vaccinations
    pub mandatory: Vec<VaccineRule>,
    /// Vaccinations recommended for the pet's health
    pub recommended: Vec<VaccineRule>,
    /// Ongoing preventative treatments
    pub preventative_treatments: Vec<Treatment>,
}

impl SchemaPartition {
    /// Whether this partition holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.mandatory.is_empty()
            && self.recommended.is_empty()
            && self.preventative_treatments.is_empty()
    }

    /// Total number of rules and treatments in this partition.
    pub fn rule_count(&self) -> usize {
        self.mandatory.len() + self.recommended.len() + self.preventative_treatments.len()
    }
}

/// Versioned rule table across all four schema partitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleTable {
    /// Table revision (e.g., "2025.1")
    pub version: String,
    /// When the table content was last revised
    pub last_updated: String,
    /// Dogs under one year
    pub puppies: SchemaPartition,
    /// Cats under one year
    pub kittens: SchemaPartition,
    /// Dogs one year and older
    pub adult_dogs: SchemaPartition,
    /// Cats one year and older
    pub adult_cats: SchemaPartition,
}

impl RuleTable {
    /// Load a rule table from JSON.
    ///
    /// A table that parses but contains no rules anywhere is rejected; an
    /// empty table would silently produce no suggestions for every pet.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let table: RuleTable = serde_json::from_str(json)?;
        if table.puppies.is_empty()
            && table.kittens.is_empty()
            && table.adult_dogs.is_empty()
            && table.adult_cats.is_empty()
        {
            return Err(TableError::Empty);
        }
        Ok(table)
    }

    /// Select the partition for a species at a given age.
    ///
    /// Returns None for unrecognized species; the caller then produces an
    /// empty suggestion list rather than an error.
    pub fn partition_for(&self, species: &str, age_weeks: u32) -> Option<&SchemaPartition> {
        let young = age_weeks < YOUNG_AGE_THRESHOLD_WEEKS;
        match species.to_lowercase().as_str() {
            "dog" => Some(if young { &self.puppies } else { &self.adult_dogs }),
            "cat" => Some(if young { &self.kittens } else { &self.adult_cats }),
            _ => None,
        }
    }

    /// Built-in veterinary default table.
    pub fn veterinary_default() -> Self {
        Self {
            version: "2025.1".into(),
            last_updated: "2025-01-15".into(),
            puppies: Self::default_puppies(),
            kittens: Self::default_kittens(),
            adult_dogs: Self::default_adult_dogs(),
            adult_cats: Self::default_adult_cats(),
        }
    }

    fn default_puppies() -> SchemaPartition {
        SchemaPartition {
            mandatory: vec![
                rule(
                    "DHPP",
                    "3 weeks",
                    6,
                    None,
                    "Distemper, hepatitis, parainfluenza and parvovirus combination; \
                     given as a series through 16 weeks",
                    &["Lethargy", "Mild fever", "Soreness at injection site"],
                ),
                rule(
                    "Rabies",
                    "Yearly",
                    12,
                    None,
                    "Core rabies vaccination, legally required in most jurisdictions",
                    &["Lethargy", "Mild fever"],
                ),
            ],
            recommended: vec![
                rule(
                    "Bordetella",
                    "6 months",
                    8,
                    None,
                    "Kennel cough protection for social or boarded puppies",
                    &["Sneezing", "Nasal discharge"],
                ),
                rule(
                    "Leptospirosis",
                    "Yearly",
                    12,
                    None,
                    "Bacterial infection spread through wildlife urine and standing water",
                    &["Lethargy", "Loss of appetite"],
                ),
            ],
            preventative_treatments: vec![
                treatment(
                    "Deworming",
                    "Monthly",
                    "Roundworm and hookworm treatment through six months of age",
                    2,
                ),
                treatment(
                    "Flea & Tick Prevention",
                    "Monthly",
                    "Topical or oral parasite preventative",
                    8,
                ),
            ],
        }
    }

    fn default_kittens() -> SchemaPartition {
        SchemaPartition {
            mandatory: vec![
                rule(
                    "FVRCP",
                    "3 weeks",
                    6,
                    None,
                    "Feline viral rhinotracheitis, calicivirus and panleukopenia \
                     combination; given as a series through 16 weeks",
                    &["Lethargy", "Mild fever", "Soreness at injection site"],
                ),
                rule(
                    "Rabies",
                    "Yearly",
                    12,
                    None,
                    "Core rabies vaccination, legally required in most jurisdictions",
                    &["Lethargy", "Mild fever"],
                ),
            ],
            recommended: vec![rule(
                "FeLV",
                "Yearly",
                8,
                None,
                "Feline leukemia virus protection, recommended for all kittens",
                &["Lethargy", "Local swelling"],
            )],
            preventative_treatments: vec![
                treatment(
                    "Deworming",
                    "Monthly",
                    "Roundworm and hookworm treatment through six months of age",
                    3,
                ),
                treatment(
                    "Flea Prevention",
                    "Monthly",
                    "Topical parasite preventative safe from birth",
                    0,
                ),
            ],
        }
    }

    fn default_adult_dogs() -> SchemaPartition {
        SchemaPartition {
            mandatory: vec![
                rule(
                    "Rabies",
                    "Yearly",
                    52,
                    None,
                    "Core rabies booster, legally required in most jurisdictions",
                    &["Lethargy", "Mild fever"],
                ),
                rule(
                    "DHPP Booster",
                    "3 years",
                    52,
                    None,
                    "Core combination booster after the puppy series",
                    &["Lethargy", "Soreness at injection site"],
                ),
            ],
            recommended: vec![
                rule(
                    "Bordetella",
                    "6 months",
                    52,
                    None,
                    "Kennel cough protection for social or boarded dogs",
                    &["Sneezing", "Nasal discharge"],
                ),
                rule(
                    "Leptospirosis",
                    "Yearly",
                    52,
                    None,
                    "Bacterial infection spread through wildlife urine and standing water",
                    &["Lethargy", "Loss of appetite"],
                ),
                rule(
                    "Lyme",
                    "Yearly",
                    52,
                    Some(10),
                    "Tick-borne disease protection for dogs in endemic regions",
                    &["Lethargy", "Local swelling"],
                ),
            ],
            preventative_treatments: vec![
                treatment(
                    "Heartworm Prevention",
                    "Monthly",
                    "Year-round heartworm preventative",
                    0,
                ),
                treatment(
                    "Flea & Tick Prevention",
                    "Monthly",
                    "Topical or oral parasite preventative",
                    0,
                ),
                treatment(
                    "Dental Cleaning",
                    "Yearly",
                    "Professional dental cleaning under anesthesia",
                    52,
                ),
            ],
        }
    }

    fn default_adult_cats() -> SchemaPartition {
        SchemaPartition {
            mandatory: vec![
                rule(
                    "Rabies",
                    "Yearly",
                    52,
                    None,
                    "Core rabies booster, legally required in most jurisdictions",
                    &["Lethargy", "Mild fever"],
                ),
                rule(
                    "FVRCP Booster",
                    "3 years",
                    52,
                    None,
                    "Core combination booster after the kitten series",
                    &["Lethargy", "Soreness at injection site"],
                ),
            ],
            recommended: vec![rule(
                "FeLV",
                "Yearly",
                52,
                None,
                "Feline leukemia virus booster for cats with outdoor access",
                &["Lethargy", "Local swelling"],
            )],
            preventative_treatments: vec![
                treatment(
                    "Flea Prevention",
                    "Monthly",
                    "Topical parasite preventative",
                    0,
                ),
                treatment(
                    "Deworming",
                    "3 months",
                    "Routine intestinal parasite treatment",
                    0,
                ),
            ],
        }
    }
}

fn rule(
    name: &str,
    frequency: &str,
    min_weeks: u32,
    max_years: Option<u32>,
    description: &str,
    side_effects: &[&str],
) -> VaccineRule {
    VaccineRule {
        name: name.into(),
        frequency: frequency.into(),
        age_restriction: Some(AgeRestriction {
            min_weeks,
            max_years,
        }),
        description: description.into(),
        side_effects: side_effects.iter().map(|s| (*s).into()).collect(),
        last_updated: "2025-01-15".into(),
    }
}

fn treatment(name: &str, frequency: &str, description: &str, min_weeks: u32) -> Treatment {
    Treatment {
        name: name.into(),
        frequency: frequency.into(),
        description: description.into(),
        min_weeks,
    }
}
