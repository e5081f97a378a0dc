//! Validates palette validation, the embedded library, and JSON loading

use std::collections::HashSet;
use std::io::Write as _;

use blockweave::GenerationError;
use blockweave::color::Rgb;
use blockweave::io::palettes::{Palette, builtin_palettes, load_palettes};

#[test]
fn test_builtin_library_is_well_formed() {
    let palettes = builtin_palettes();
    assert_eq!(palettes.len(), 12);
    for palette in &palettes {
        assert_eq!(palette.colors().len(), 5);
        let distinct: HashSet<&Rgb> = palette.colors().iter().collect();
        assert_eq!(distinct.len(), 5);
    }
}

#[test]
fn test_wrong_size_palette_rejected() -> blockweave::Result<()> {
    let three = vec![
        Rgb::from_hex("#111111")?,
        Rgb::from_hex("#222222")?,
        Rgb::from_hex("#333333")?,
    ];
    assert!(matches!(
        Palette::new(three),
        Err(GenerationError::PaletteUnavailable { .. })
    ));
    Ok(())
}

#[test]
fn test_repeated_colors_rejected() -> blockweave::Result<()> {
    let repeated = vec![
        Rgb::from_hex("#111111")?,
        Rgb::from_hex("#111111")?,
        Rgb::from_hex("#333333")?,
        Rgb::from_hex("#444444")?,
        Rgb::from_hex("#555555")?,
    ];
    assert!(matches!(
        Palette::new(repeated),
        Err(GenerationError::PaletteUnavailable { .. })
    ));
    Ok(())
}

#[test]
fn test_load_filters_unusable_entries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("palettes.json");
    let mut file = std::fs::File::create(&path)?;
    writeln!(
        file,
        r##"[
            ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"],
            ["#111111", "#222222", "#333333"],
            ["#zzzzzz", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"]
        ]"##
    )?;
    let palettes = load_palettes(&path)?;
    assert_eq!(palettes.len(), 1);
    assert_eq!(
        palettes.first().map(|palette| palette.colors().len()),
        Some(5)
    );
    Ok(())
}

#[test]
fn test_load_fails_when_nothing_usable_remains() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("palettes.json");
    std::fs::write(&path, r##"[["#111111", "#222222"]]"##)?;
    assert!(matches!(
        load_palettes(&path),
        Err(GenerationError::PaletteUnavailable { .. })
    ));
    Ok(())
}

#[test]
fn test_load_rejects_invalid_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("palettes.json");
    std::fs::write(&path, "not json")?;
    assert!(matches!(
        load_palettes(&path),
        Err(GenerationError::PaletteFile { .. })
    ));
    Ok(())
}

#[test]
fn test_load_reports_missing_file() {
    let result = load_palettes(std::path::Path::new("/no/such/palettes.json"));
    assert!(matches!(result, Err(GenerationError::FileSystem { .. })));
}
