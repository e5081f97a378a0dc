//! The fixed catalog of placement patterns
//!
//! A catalog entry pairs a drawing behavior with the predicate deciding
//! where it may apply. The catalog is immutable configuration: the placement
//! engine selects entries uniformly at random and retries while the
//! predicate rejects the placement context.

use crate::layout::occupancy::OccupancyMap;
use crate::patterns::draw::{self, DrawFn};

/// Placement scale of a catalog application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// One grid cell
    Full,
    /// A 2×2 merged block
    Double,
    /// One quadrant of a subdivided cell
    Half,
}

impl Scale {
    /// Multiplier applied to the cell transform
    pub const fn factor(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Double => 2.0,
            Self::Half => 0.5,
        }
    }
}

/// Context a predicate sees when judging a candidate placement
pub struct PatternContext<'a> {
    /// Requested placement scale
    pub scale: Scale,
    /// Grid column of the originating cell
    pub column: usize,
    /// Grid row of the originating cell
    pub row: usize,
    /// Current cell ownership
    pub occupancy: &'a OccupancyMap,
}

/// Applicability predicate of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// Accepts any placement context
    Always,
    /// Accepts only unscaled single-cell placements
    UnitScale,
    /// Accepts only unscaled placements whose right, lower, and diagonal
    /// neighbors are inside the grid and unclaimed
    MergeTarget,
}

impl Applicability {
    /// Whether the entry may apply in the given context
    pub fn accepts(self, context: &PatternContext<'_>) -> bool {
        match self {
            Self::Always => true,
            Self::UnitScale => context.scale == Scale::Full,
            Self::MergeTarget => {
                context.scale == Scale::Full
                    && context
                        .occupancy
                        .merge_neighbors_free(context.column, context.row)
            }
        }
    }
}

/// Behavior of a catalog entry once selected
#[derive(Clone, Copy)]
pub enum PatternKind {
    /// Append shapes directly via a draw procedure
    Draw(DrawFn),
    /// Recurse into the four quadrants at half scale
    Subdivide,
    /// Recurse at double scale, claiming the 2×2 region
    Merge,
}

impl std::fmt::Debug for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draw(_) => f.write_str("Draw"),
            Self::Subdivide => f.write_str("Subdivide"),
            Self::Merge => f.write_str("Merge"),
        }
    }
}

/// One named catalog entry
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    /// Stable name, used in traces and tests
    pub name: &'static str,
    /// What applying the entry does
    pub kind: PatternKind,
    /// Where the entry may apply
    pub applicability: Applicability,
}

/// The ordered, immutable set of patterns a generation pass selects from
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    entries: Vec<PatternSpec>,
}

impl PatternCatalog {
    /// The standard nine-pattern catalog
    ///
    /// Seven always-applicable draw procedures, the quadrant subdivision,
    /// and the 2×2 merge. The always-applicable entries guarantee that
    /// selection terminates in every reachable context.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                PatternSpec {
                    name: "circle",
                    kind: PatternKind::Draw(draw::circle_with_hole),
                    applicability: Applicability::Always,
                },
                PatternSpec {
                    name: "opposed-circles",
                    kind: PatternKind::Draw(draw::opposed_circles),
                    applicability: Applicability::Always,
                },
                PatternSpec {
                    name: "dots",
                    kind: PatternKind::Draw(draw::dot_matrix),
                    applicability: Applicability::Always,
                },
                PatternSpec {
                    name: "bars",
                    kind: PatternKind::Draw(draw::bars),
                    applicability: Applicability::Always,
                },
                PatternSpec {
                    name: "cross",
                    kind: PatternKind::Draw(draw::cross),
                    applicability: Applicability::Always,
                },
                PatternSpec {
                    name: "diagonal",
                    kind: PatternKind::Draw(draw::diagonal_half),
                    applicability: Applicability::Always,
                },
                PatternSpec {
                    name: "glyph",
                    kind: PatternKind::Draw(draw::glyph),
                    applicability: Applicability::Always,
                },
                PatternSpec {
                    name: "quadrants",
                    kind: PatternKind::Subdivide,
                    applicability: Applicability::UnitScale,
                },
                PatternSpec {
                    name: "large-block",
                    kind: PatternKind::Merge,
                    applicability: Applicability::MergeTarget,
                },
            ],
        }
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[PatternSpec] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
