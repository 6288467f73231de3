//! Core draw types
//!
//! The word catalog, the fair-draw index pool and the statistics used to audit
//! the shuffle. Nothing here touches the terminal or the clock.

mod catalog;
mod fairness;
mod pool;

pub use catalog::{CatalogError, WORD_LENGTH, WordCatalog};
pub use fairness::PositionTally;
pub use pool::{IndexPool, fisher_yates};
