//! Validates error display formatting and source chaining

use std::error::Error as _;
use std::path::PathBuf;

use blockweave::GenerationError;

#[test]
fn test_invalid_seed_display() {
    let error = GenerationError::InvalidSeed { value: 0 };
    assert!(error.to_string().contains("non-zero"));
}

#[test]
fn test_palette_unavailable_display_names_requirement() {
    let error = GenerationError::PaletteUnavailable { required: 5 };
    assert!(error.to_string().contains('5'));
}

#[test]
fn test_predicate_deadlock_display_names_cell() {
    let error = GenerationError::PredicateDeadlock {
        column: 2,
        row: 3,
        attempts: 1000,
    };
    let message = error.to_string();
    assert!(message.contains("(2, 3)"));
    assert!(message.contains("1000"));
}

#[test]
fn test_invalid_color_display_echoes_value() {
    let error = GenerationError::InvalidColor {
        value: "#nope".to_string(),
    };
    assert!(error.to_string().contains("#nope"));
}

#[test]
fn test_file_system_error_chains_source() {
    let error = GenerationError::FileSystem {
        path: PathBuf::from("/tmp/out.svg"),
        operation: "write",
        source: std::io::Error::other("disk full"),
    };
    assert!(error.to_string().contains("write"));
    assert!(error.to_string().contains("/tmp/out.svg"));
    assert!(error.source().is_some());
}

#[test]
fn test_validation_errors_have_no_source() {
    assert!(GenerationError::EmptyCollection.source().is_none());
    assert!(GenerationError::InvalidSeed { value: 0 }.source().is_none());
}

#[test]
fn test_io_error_conversion() {
    let error: GenerationError = std::io::Error::other("denied").into();
    assert!(matches!(error, GenerationError::FileSystem { .. }));
}
