//! Age calculation from birth dates.

use chrono::{DateTime, NaiveDate, Utc};

const DAYS_PER_WEEK: i64 = 7;

/// Age in whole weeks at `now`.
///
/// Missing, malformed, and future birth dates all resolve to 0, so a bad
/// record degrades to "minimum-age rules ineligible" instead of failing
/// the whole schedule.
pub fn age_in_weeks(birth_date: Option<&str>, now: DateTime<Utc>) -> u32 {
    let Some(raw) = birth_date else {
        return 0;
    };
    let Some(born) = parse_birth_date(raw) else {
        return 0;
    };
    let days = (now.date_naive() - born).num_days();
    if days < 0 {
        return 0;
    }
    (days / DAYS_PER_WEEK) as u32
}

/// Accept a plain ISO date or a full RFC 3339 timestamp.
fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
