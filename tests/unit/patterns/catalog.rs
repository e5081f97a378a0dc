//! Validates the standard catalog and its applicability predicates

use std::collections::HashSet;

use blockweave::layout::OccupancyMap;
use blockweave::patterns::{Applicability, PatternCatalog, PatternContext, Scale};

fn context(scale: Scale, column: usize, row: usize, occupancy: &OccupancyMap) -> PatternContext<'_> {
    PatternContext {
        scale,
        column,
        row,
        occupancy,
    }
}

#[test]
fn test_standard_catalog_shape() {
    let catalog = PatternCatalog::standard();
    assert_eq!(catalog.len(), 9);
    assert!(!catalog.is_empty());

    let names: HashSet<&str> = catalog.entries().iter().map(|entry| entry.name).collect();
    assert_eq!(names.len(), 9, "catalog names must be unique");

    // Termination of retry-until-valid selection needs an entry that
    // accepts every reachable context
    assert!(
        catalog
            .entries()
            .iter()
            .any(|entry| entry.applicability == Applicability::Always)
    );
}

#[test]
fn test_always_accepts_every_scale() {
    let occupancy = OccupancyMap::new(4, 4);
    for scale in [Scale::Full, Scale::Double, Scale::Half] {
        assert!(Applicability::Always.accepts(&context(scale, 3, 3, &occupancy)));
    }
}

#[test]
fn test_unit_scale_only_accepts_full() {
    let occupancy = OccupancyMap::new(4, 4);
    assert!(Applicability::UnitScale.accepts(&context(Scale::Full, 0, 0, &occupancy)));
    assert!(!Applicability::UnitScale.accepts(&context(Scale::Half, 0, 0, &occupancy)));
    assert!(!Applicability::UnitScale.accepts(&context(Scale::Double, 0, 0, &occupancy)));
}

#[test]
fn test_merge_target_requires_free_neighbors() {
    let mut occupancy = OccupancyMap::new(4, 4);
    assert!(Applicability::MergeTarget.accepts(&context(Scale::Full, 0, 0, &occupancy)));

    let _ = occupancy.claim(1, 1);
    assert!(!Applicability::MergeTarget.accepts(&context(Scale::Full, 0, 0, &occupancy)));
    // The claim only blocks merges whose 2x2 region overlaps it
    assert!(Applicability::MergeTarget.accepts(&context(Scale::Full, 2, 2, &occupancy)));
}

#[test]
fn test_merge_target_rejects_last_column_and_row() {
    let occupancy = OccupancyMap::new(4, 4);
    assert!(!Applicability::MergeTarget.accepts(&context(Scale::Full, 3, 1, &occupancy)));
    assert!(!Applicability::MergeTarget.accepts(&context(Scale::Full, 1, 3, &occupancy)));
}

#[test]
fn test_merge_target_rejects_other_scales() {
    let occupancy = OccupancyMap::new(4, 4);
    assert!(!Applicability::MergeTarget.accepts(&context(Scale::Double, 0, 0, &occupancy)));
    assert!(!Applicability::MergeTarget.accepts(&context(Scale::Half, 0, 0, &occupancy)));
}

#[test]
fn test_scale_factors() {
    assert!((Scale::Full.factor() - 1.0).abs() < f64::EPSILON);
    assert!((Scale::Double.factor() - 2.0).abs() < f64::EPSILON);
    assert!((Scale::Half.factor() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_structural_entries_are_last() {
    let catalog = PatternCatalog::standard();
    assert!(
        catalog
            .entries()
            .get(7)
            .is_some_and(|entry| entry.name == "quadrants"
                && entry.applicability == Applicability::UnitScale)
    );
    assert!(
        catalog
            .entries()
            .get(8)
            .is_some_and(|entry| entry.name == "large-block"
                && entry.applicability == Applicability::MergeTarget)
    );
}
