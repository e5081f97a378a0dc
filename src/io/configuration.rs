//! Layout constants and runtime configuration defaults

// Grid dimensions are drawn per layout from this inclusive range
/// Smallest column or row count a layout may draw
pub const GRID_MIN_SPAN: i64 = 4;
/// Largest column or row count a layout may draw
pub const GRID_MAX_SPAN: i64 = 8;

/// Edge length of one grid cell in user units
pub const SQUARE_SIZE: f64 = 120.0;

/// Margin around the grid in user units
pub const MARGIN: f64 = 40.0;

/// Number of distinct colors a usable palette must hold
pub const PALETTE_SIZE: usize = 5;

// A catalog with an always-applicable entry converges in a handful of
// draws; hitting this bound means the catalog is misconfigured
/// Maximum pattern selection attempts per placement
pub const MAX_PATTERN_RETRIES: usize = 1000;

/// How far the backdrop color is pushed toward white
pub const BACKDROP_LIGHTEN: f64 = 0.75;

/// Id of the square clip path shared by overflow-clipped patterns
pub const SQUARE_CLIP_ID: &str = "square-clip";

// Output settings
/// File extension for generated artwork
pub const OUTPUT_EXTENSION: &str = "svg";
/// Suffix inserted before the extension of replay variant files
pub const VARIANT_SUFFIX: &str = "_v";
/// Stem used when naming outputs inside a target directory
pub const OUTPUT_STEM: &str = "blockweave";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
