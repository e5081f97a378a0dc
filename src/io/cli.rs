//! Command-line interface for batch generation of SVG artworks

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_STEM, VARIANT_SUFFIX};
use crate::io::error::Result;
use crate::io::export::export_scene_as_svg;
use crate::io::palettes::{Palette, builtin_palettes, load_palettes};
use crate::io::progress::ProgressManager;
use crate::layout::Generator;
use crate::random::engine::clock_seed;

#[derive(Parser)]
#[command(name = "blockweave")]
#[command(version, about = "Generate seeded grid artwork as SVG")]
/// Command-line arguments for the artwork generation tool
pub struct Cli {
    /// Output SVG file or directory
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation (absent or zero draws one
    /// from the clock)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Number of artworks to generate, from consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Replay variants per artwork: identical layout, shifted palette
    #[arg(short, long, default_value_t = 0)]
    pub variants: usize,

    /// JSON palette file (arrays of five #rrggbb colors)
    #[arg(short, long)]
    pub palettes: Option<PathBuf>,

    /// Suppress progress and skip messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Write outputs even if the file exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch generation with progress tracking
pub struct BatchRunner {
    cli: Cli,
}

impl BatchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate every requested artwork and variant
    ///
    /// Every pass of a skipped artwork still runs, so variant numbering and
    /// replay indices stay stable whether or not earlier files exist; only
    /// the writes are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error when palette loading, generation, or writing fails.
    pub fn process(&mut self) -> Result<()> {
        let palettes = self.resolve_palettes()?;
        let base_seed = self.cli.seed.filter(|&seed| seed != 0).unwrap_or_else(clock_seed);

        let total = self.cli.count * (self.cli.variants + 1);
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(total));

        for index in 0..self.cli.count {
            let seed = nonzero_seed(base_seed, index);
            let mut generator = Generator::new(Some(seed), palettes.clone())?;
            let primary = self.primary_output_path(seed);

            for variant in 0..=self.cli.variants {
                let output_path = if variant == 0 {
                    primary.clone()
                } else {
                    Self::variant_output_path(&primary, variant)
                };

                if let Some(ref pm) = progress {
                    pm.start_output(&output_path.display().to_string());
                }

                let scene = if variant == 0 {
                    generator.generate()?
                } else {
                    generator.regenerate()?
                };

                if self.should_write(&output_path) {
                    export_scene_as_svg(&scene, &output_path)?;
                }

                if let Some(ref pm) = progress {
                    pm.complete_output();
                }
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        Ok(())
    }

    fn resolve_palettes(&self) -> Result<Vec<Palette>> {
        match &self.cli.palettes {
            Some(path) => load_palettes(path),
            None => Ok(builtin_palettes()),
        }
    }

    fn should_write(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }
        // Allow print for user feedback on skipped outputs
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!("Skipping: {} (output exists)", output_path.display());
        }
        false
    }

    /// Output path of the first pass for a seed
    ///
    /// A directory target (or one without an extension) gets seed-named
    /// files inside it; a file target is used as given, with the seed
    /// appended when generating a series.
    pub fn primary_output_path(&self, seed: u32) -> PathBuf {
        let target = &self.cli.target;
        if target.is_dir() || target.extension().is_none() {
            return target.join(format!("{OUTPUT_STEM}_{seed}.{OUTPUT_EXTENSION}"));
        }
        if self.cli.count > 1 {
            let stem = target.file_stem().unwrap_or_default().to_string_lossy();
            let name = format!("{stem}_{seed}.{OUTPUT_EXTENSION}");
            return target.with_file_name(name);
        }
        target.clone()
    }

    /// Output path of a replay variant, derived from the primary path
    pub fn variant_output_path(primary: &Path, variant: usize) -> PathBuf {
        let stem = primary.file_stem().unwrap_or_default().to_string_lossy();
        let name = format!("{stem}{VARIANT_SUFFIX}{variant}.{OUTPUT_EXTENSION}");
        primary.with_file_name(name)
    }
}

/// Seed for the `index`-th artwork of a series, never zero
fn nonzero_seed(base_seed: u32, index: usize) -> u32 {
    let seed = base_seed.wrapping_add(index as u32);
    if seed == 0 { 1 } else { seed }
}
