//! Vaccine suggestion engine.
//!
//! Pipeline: Age → Schema Selection → Per-Rule Building → Aggregation

mod age;
mod aggregate;
mod builder;
mod frequency;

pub use age::*;
pub use aggregate::*;
pub use builder::*;
pub use frequency::*;

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{Pet, RuleCategory, VaccineSchedule, VaccineSuggestion};
use crate::tables::RuleTable;

/// Stateless suggestion engine over a rule table.
///
/// Every public operation captures "now" exactly once and threads that
/// same instant through the whole computation, so the due dates and
/// overdue flags inside one result can never straddle a day boundary.
/// Each operation also has an `_at` twin taking a pinned clock.
pub struct SuggestionEngine<'a> {
    table: &'a RuleTable,
}

impl<'a> SuggestionEngine<'a> {
    /// Create an engine over a rule table.
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Prioritized, de-duplicated suggestions for one pet.
    ///
    /// Unrecognized species and ineligible or malformed rules all degrade
    /// to fewer suggestions, never to an error.
    pub fn suggestions_for(&self, pet: &Pet) -> Vec<VaccineSuggestion> {
        self.suggestions_for_at(pet, Utc::now())
    }

    /// [`Self::suggestions_for`] with a pinned clock.
    pub fn suggestions_for_at(&self, pet: &Pet, now: DateTime<Utc>) -> Vec<VaccineSuggestion> {
        let age_weeks = age_in_weeks(pet.birth_date.as_deref(), now);
        let species = pet.canonical_species();
        let Some(partition) = self.table.partition_for(&species, age_weeks) else {
            return Vec::new();
        };
        let today = now.date_naive();

        let mut suggestions = Vec::new();
        for rule in &partition.mandatory {
            suggestions.extend(build_suggestion(rule, RuleCategory::Mandatory, age_weeks, today));
        }
        for rule in &partition.recommended {
            suggestions.extend(build_suggestion(rule, RuleCategory::Recommended, age_weeks, today));
        }
        for treatment in &partition.preventative_treatments {
            suggestions.extend(build_treatment_suggestion(treatment, age_weeks, today));
        }

        // Stable sort: ties keep the mandatory → recommended → preventative
        // enumeration order, and the table's own order within each list.
        suggestions.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
        dedup_by_name(suggestions)
    }

    /// Aggregated schedule view for one pet.
    pub fn schedule_for(&self, pet: &Pet) -> VaccineSchedule {
        self.schedule_for_at(pet, Utc::now())
    }

    /// [`Self::schedule_for`] with a pinned clock.
    pub fn schedule_for_at(&self, pet: &Pet, now: DateTime<Utc>) -> VaccineSchedule {
        build_schedule(pet, self.suggestions_for_at(pet, now))
    }

    /// Schedules for every pet, in input order.
    pub fn schedules_for(&self, pets: &[Pet]) -> Vec<VaccineSchedule> {
        self.schedules_for_at(pets, Utc::now())
    }

    /// [`Self::schedules_for`] with a pinned clock.
    pub fn schedules_for_at(&self, pets: &[Pet], now: DateTime<Utc>) -> Vec<VaccineSchedule> {
        pets.iter().map(|pet| self.schedule_for_at(pet, now)).collect()
    }

    /// All overdue suggestions across a pet collection, most urgent first.
    pub fn overdue_across(&self, pets: &[Pet]) -> Vec<VaccineSuggestion> {
        self.overdue_across_at(pets, Utc::now())
    }

    /// [`Self::overdue_across`] with a pinned clock.
    pub fn overdue_across_at(&self, pets: &[Pet], now: DateTime<Utc>) -> Vec<VaccineSuggestion> {
        collect_overdue(self.flatten(pets, now))
    }

    /// Suggestions due within the default 30-day window across a pet
    /// collection, soonest first.
    pub fn upcoming_across(&self, pets: &[Pet]) -> Vec<VaccineSuggestion> {
        self.upcoming_within(pets, DEFAULT_UPCOMING_WINDOW_DAYS)
    }

    /// Suggestions due within `days_ahead` days across a pet collection.
    pub fn upcoming_within(&self, pets: &[Pet], days_ahead: i64) -> Vec<VaccineSuggestion> {
        self.upcoming_within_at(pets, days_ahead, Utc::now())
    }

    /// [`Self::upcoming_within`] with a pinned clock.
    pub fn upcoming_within_at(
        &self,
        pets: &[Pet],
        days_ahead: i64,
        now: DateTime<Utc>,
    ) -> Vec<VaccineSuggestion> {
        collect_upcoming(self.flatten(pets, now), now.date_naive(), days_ahead)
    }

    fn flatten(&self, pets: &[Pet], now: DateTime<Utc>) -> Vec<VaccineSuggestion> {
        pets.iter()
            .flat_map(|pet| self.suggestions_for_at(pet, now))
            .collect()
    }
}

/// Drop duplicate vaccine names, first occurrence wins.
///
/// The list is already priority-sorted, so the kept duplicate is the
/// highest-priority one.
fn dedup_by_name(suggestions: Vec<VaccineSuggestion>) -> Vec<VaccineSuggestion> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|s| seen.insert(s.vaccine.name.to_lowercase()))
        .collect()
}
