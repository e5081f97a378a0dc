//! SVG file export

use std::path::Path;

use crate::io::error::{Result, file_system_error};
use crate::layout::Scene;

/// Write a scene to disk as an SVG document
///
/// Creates missing parent directories.
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`](crate::GenerationError::FileSystem)
/// when directory creation or the write fails.
pub fn export_scene_as_svg(scene: &Scene, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|source| file_system_error(parent, "create directory", source))?;
        }
    }
    std::fs::write(output_path, scene.to_svg())
        .map_err(|source| file_system_error(output_path, "write", source))
}
