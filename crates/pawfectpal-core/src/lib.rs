//! PawfectPal Core Library
//!
//! Vaccine suggestion engine for pet-care scheduling.
//!
//! # Architecture
//!
//! ```text
//! Rule Table ──▶ Schema Selector (species + age in weeks)
//!                        │
//!                        ▼
//!             Suggestion Builder (per rule)
//!        age-eligibility gate + due-date projection
//!                        │
//!                        ▼
//!        per-pet suggestion list (priority-sorted)
//!                        │
//!          ┌─────────────┼─────────────┐
//!          ▼             ▼             ▼
//!      Schedule       Overdue       Upcoming
//!     (per pet)     (all pets)     (all pets)
//! ```
//!
//! # Core Principle
//!
//! **Malformed input never fails the pipeline.** A missing birth date, a
//! rule without an age restriction, or unparseable frequency text degrades
//! to "no suggestion" for that one record; every other record still
//! computes. The only fallible operation in the crate is loading a rule
//! table from JSON.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Pet, VaccineRule, VaccineSuggestion, etc.)
//! - [`tables`]: Static rule tables partitioned by species and life stage
//! - [`engine`]: Suggestion engine (age, eligibility, projection, aggregation)

pub mod engine;
pub mod models;
pub mod tables;

// Re-export commonly used types
pub use engine::SuggestionEngine;
pub use models::{
    AgeRestriction, Pet, Priority, RuleCategory, Treatment, VaccineRule, VaccineSchedule,
    VaccineSuggestion,
};
pub use tables::{RuleTable, SchemaPartition, TableError};
