//! Rendering surface: structured SVG building, no display access
//!
//! The generator never touches markup strings while placing patterns; it
//! appends [`Element`]s to a tree and serialization happens once at export.

/// SVG element tree and serializer
pub mod svg;

pub use svg::{Element, Node, format_number};
