//! Schedule aggregation over suggestion lists.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDate};

use crate::models::{Pet, VaccineSchedule, VaccineSuggestion};

/// Default lookahead window for the upcoming view, in days.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 30;

/// Fold one pet's suggestions into its schedule view.
pub fn build_schedule(pet: &Pet, suggestions: Vec<VaccineSuggestion>) -> VaccineSchedule {
    let overdue_count = suggestions.iter().filter(|s| s.is_overdue).count();
    let upcoming_count = suggestions.iter().filter(|s| s.is_upcoming()).count();
    let next_due_date = suggestions
        .iter()
        .filter(|s| !s.is_overdue)
        .filter_map(|s| s.due_date)
        .min();

    VaccineSchedule {
        pet_id: pet.id.clone(),
        pet_name: pet.name.clone(),
        suggestions,
        overdue_count,
        upcoming_count,
        next_due_date,
    }
}

/// Keep overdue entries, most urgent first: priority descending, then due
/// date ascending within a tier so the longest-overdue item surfaces
/// first. Entries of equal priority without comparable due dates keep
/// their relative order.
pub fn collect_overdue(suggestions: Vec<VaccineSuggestion>) -> Vec<VaccineSuggestion> {
    let mut overdue: Vec<VaccineSuggestion> =
        suggestions.into_iter().filter(|s| s.is_overdue).collect();

    overdue.sort_by(|a, b| {
        b.priority
            .weight()
            .cmp(&a.priority.weight())
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
                _ => Ordering::Equal,
            })
    });
    overdue
}

/// Keep entries due within `days_ahead` days of `today`, soonest first.
///
/// Priority is deliberately not part of this ordering; the upcoming view
/// sorts strictly by due date.
pub fn collect_upcoming(
    suggestions: Vec<VaccineSuggestion>,
    today: NaiveDate,
    days_ahead: i64,
) -> Vec<VaccineSuggestion> {
    let cutoff = today + Duration::days(days_ahead);
    let mut upcoming: Vec<VaccineSuggestion> = suggestions
        .into_iter()
        .filter(|s| !s.is_overdue)
        .filter(|s| s.due_date.is_some_and(|due| due <= cutoff))
        .collect();

    upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    upcoming
}
