//! Palette validation, the embedded palette library, and JSON loading
//!
//! A palette is exactly [`PALETTE_SIZE`](crate::io::configuration::PALETTE_SIZE)
//! distinct colors. Distinctness matters beyond looks: replay passes only
//! consume identical draw sequences when no two palette entries compare
//! equal inside the urn. Palette files use the same shape as the
//! `nice-color-palettes` dataset: a JSON array of five-element arrays of
//! `#rrggbb` strings.

use std::collections::HashSet;
use std::path::Path;

use crate::color::Rgb;
use crate::io::configuration::PALETTE_SIZE;
use crate::io::error::{GenerationError, Result, file_system_error};

/// Palettes compiled into the binary, used when no palette file is given
const BUILTIN_PALETTES: [[&str; PALETTE_SIZE]; 12] = [
    ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"],
    ["#fe4365", "#fc9d9a", "#f9cdad", "#c8c8a9", "#83af9b"],
    ["#ecd078", "#d95b43", "#c02942", "#542437", "#53777a"],
    ["#556270", "#4ecdc4", "#c7f464", "#ff6b6b", "#c44d58"],
    ["#774f38", "#e08e79", "#f1d4af", "#ece5ce", "#c5e0dc"],
    ["#e8ddcb", "#cdb380", "#036564", "#033649", "#031634"],
    ["#490a3d", "#bd1550", "#e97f02", "#f8ca00", "#8a9b0f"],
    ["#594f4f", "#547980", "#45ada8", "#9de0ad", "#e5fcc2"],
    ["#00a0b0", "#6a4a3c", "#cc333f", "#eb6841", "#edc951"],
    ["#e94e77", "#d68189", "#c6a49a", "#c6e5d9", "#f4ead5"],
    ["#3fb8af", "#7fc7af", "#dad8a7", "#ff9e9d", "#ff3d7f"],
    ["#d9ceb2", "#948c75", "#d5ded9", "#7a6a53", "#99b2b7"],
];

/// A validated set of exactly [`PALETTE_SIZE`] distinct colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Validate and wrap a color set
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::PaletteUnavailable`] when the set does not
    /// hold exactly [`PALETTE_SIZE`] distinct colors.
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        let distinct = colors.iter().collect::<HashSet<_>>().len();
        if colors.len() != PALETTE_SIZE || distinct != PALETTE_SIZE {
            return Err(GenerationError::PaletteUnavailable {
                required: PALETTE_SIZE,
            });
        }
        Ok(Self { colors })
    }

    /// The palette colors in order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

/// The embedded palette library
pub fn builtin_palettes() -> Vec<Palette> {
    BUILTIN_PALETTES
        .iter()
        .filter_map(|entry| {
            let colors = entry
                .iter()
                .map(|hex| Rgb::from_hex(hex))
                .collect::<Result<Vec<_>>>()
                .ok()?;
            Palette::new(colors).ok()
        })
        .collect()
}

/// Load palettes from a JSON file, keeping only usable entries
///
/// Entries of the wrong size, with repeated colors, or with malformed hex
/// values are dropped silently; the dataset the format comes from mixes
/// palette sizes.
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] when the file cannot be read,
/// [`GenerationError::PaletteFile`] when it is not valid JSON of the
/// expected shape, and [`GenerationError::PaletteUnavailable`] when no
/// usable palette remains after filtering.
pub fn load_palettes(path: &Path) -> Result<Vec<Palette>> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| file_system_error(path, "read", source))?;
    let raw: Vec<Vec<String>> =
        serde_json::from_str(&text).map_err(|source| GenerationError::PaletteFile {
            path: path.to_path_buf(),
            source,
        })?;
    let palettes: Vec<Palette> = raw
        .iter()
        .filter_map(|entry| {
            let colors = entry
                .iter()
                .map(|hex| Rgb::from_hex(hex))
                .collect::<Result<Vec<_>>>()
                .ok()?;
            Palette::new(colors).ok()
        })
        .collect();
    if palettes.is_empty() {
        return Err(GenerationError::PaletteUnavailable {
            required: PALETTE_SIZE,
        });
    }
    Ok(palettes)
}
