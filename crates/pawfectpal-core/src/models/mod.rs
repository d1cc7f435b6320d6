//! Domain models for the pawfectpal vaccine engine.

mod pet;
mod rule;
mod suggestion;

pub use pet::*;
pub use rule::*;
pub use suggestion::*;
