//! Grid placement: occupancy tracking and the generation pass

/// The seeded generation pass and its outputs
pub mod engine;
/// Cell ownership table with explicit placement ids
pub mod occupancy;

pub use engine::{Generator, LayoutParams, PlacementDecision, Scene};
pub use occupancy::{OccupancyMap, PlacementId};
