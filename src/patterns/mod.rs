//! Pattern catalog: named drawing procedures with applicability predicates

/// Catalog entries, predicates, and placement scales
pub mod catalog;
/// Draw procedures for the always-applicable entries
pub mod draw;

pub use catalog::{Applicability, PatternCatalog, PatternContext, PatternKind, PatternSpec, Scale};
pub use draw::{DrawContext, DrawFn};
