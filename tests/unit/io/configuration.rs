//! Sanity checks over the layout constants

use blockweave::io::configuration::{
    GRID_MAX_SPAN, GRID_MIN_SPAN, MARGIN, MAX_PATTERN_RETRIES, PALETTE_SIZE, SQUARE_SIZE,
};

#[test]
fn test_grid_span_range_is_ordered() {
    assert!(GRID_MIN_SPAN >= 1);
    assert!(GRID_MIN_SPAN <= GRID_MAX_SPAN);
}

#[test]
fn test_geometry_constants_are_positive() {
    assert!(SQUARE_SIZE > 0.0);
    assert!(MARGIN >= 0.0);
}

#[test]
fn test_selection_bound_and_palette_size() {
    assert!(MAX_PATTERN_RETRIES > 0);
    assert!(PALETTE_SIZE >= 2, "replay needs room for distinct colors");
}
