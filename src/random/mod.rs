//! Randomness primitives: the seeded engine, its entropy stand-in, and the
//! sampling urn
//!
//! Engines are always passed explicitly; nothing in the crate reaches for a
//! hidden global generator, which keeps every call site testable with a
//! deterministic substitute.

/// Seeded and entropy-backed random engines
pub mod engine;
/// Repeat-avoiding sampling container
pub mod urn;

pub use engine::{EntropyRng, RandomSource, XorShift32};
pub use urn::Urn;
