//! Grid placement engine: the deterministic generation pass
//!
//! A [`Generator`] owns the seeded engine and the layout decisions drawn
//! from it. Construction performs the layout-independent setup (grid span
//! draws and the base palette choice) and captures the replay checkpoint;
//! every pass afterwards restores that checkpoint, so the structural
//! decision sequence is bit-for-bit identical across passes while the
//! palette may change.
//!
//! Cells are visited columns-outer, rows-inner, both ascending. Each unclaimed
//! cell draws its colors, selects a pattern by bounded retry-until-valid
//! sampling, and either draws directly, subdivides into four quadrants, or
//! merges into a 2×2 block claimed under one placement id.

use crate::color::{Rgb, WHITE, mix};
use crate::io::configuration::{
    BACKDROP_LIGHTEN, GRID_MAX_SPAN, GRID_MIN_SPAN, MARGIN, MAX_PATTERN_RETRIES, PALETTE_SIZE,
    SQUARE_CLIP_ID, SQUARE_SIZE,
};
use crate::io::error::{GenerationError, Result};
use crate::io::palettes::Palette;
use crate::layout::occupancy::OccupancyMap;
use crate::patterns::{DrawContext, PatternCatalog, PatternContext, PatternKind, PatternSpec, Scale};
use crate::random::{RandomSource, Urn, XorShift32};
use crate::render::{Element, format_number};

/// Quadrant offsets, in placement order, for the subdivision pattern
const QUADRANT_OFFSETS: [(f64, f64); 4] = [(0.0, 0.0), (0.5, 0.0), (0.0, 0.5), (0.5, 0.5)];

/// Layout dimensions, fixed once drawn at generator construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Number of grid columns
    pub columns: usize,
    /// Number of grid rows
    pub rows: usize,
    /// Cell edge length in user units
    pub square_size: f64,
    /// Margin around the grid in user units
    pub margin: f64,
}

impl LayoutParams {
    /// Total document width including margins
    pub fn width(&self) -> f64 {
        (self.columns as f64).mul_add(self.square_size, 2.0 * self.margin)
    }

    /// Total document height including margins
    pub fn height(&self) -> f64 {
        (self.rows as f64).mul_add(self.square_size, 2.0 * self.margin)
    }
}

/// One recorded structural decision of a pass
///
/// The ordered decision trace is what replay keeps invariant: two passes
/// over the same checkpoint produce equal traces whatever their palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementDecision {
    /// Index of the selected pattern in the catalog
    pub pattern: usize,
    /// Scale the pattern was applied at
    pub scale: Scale,
    /// Grid column of the originating cell
    pub column: usize,
    /// Grid row of the originating cell
    pub row: usize,
}

/// Finished output of one generation pass
#[derive(Debug, Clone)]
pub struct Scene {
    root: Element,
    page_color: Rgb,
    occupancy: OccupancyMap,
    decisions: Vec<PlacementDecision>,
    palette: Palette,
}

impl Scene {
    /// The assembled SVG document root
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The mixed backdrop color
    pub const fn page_color(&self) -> Rgb {
        self.page_color
    }

    /// Final cell ownership of the pass
    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    /// Structural decisions in placement order
    pub fn decisions(&self) -> &[PlacementDecision] {
        &self.decisions
    }

    /// The palette the pass drew colors from
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Serialize the scene as SVG markup
    pub fn to_svg(&self) -> String {
        self.root.to_svg()
    }
}

/// Working state owned by exactly one pass
struct PassState {
    urn: Urn<Rgb, XorShift32>,
    occupancy: OccupancyMap,
    decisions: Vec<PlacementDecision>,
}

/// Seeded generator for one layout and its replay variants
pub struct Generator {
    rng: XorShift32,
    seed: u32,
    checkpoint: u32,
    params: LayoutParams,
    palettes: Vec<Palette>,
    base_palette: usize,
    replays: usize,
    catalog: PatternCatalog,
}

impl Generator {
    /// Create a generator, drawing the layout parameters and base palette
    /// and capturing the replay checkpoint
    ///
    /// An absent or zero `seed` is substituted with a clock-derived value;
    /// the effective seed is reported by [`seed`](Self::seed).
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::PaletteUnavailable`] when `palettes` is
    /// empty. Nothing is generated in that case.
    pub fn new(seed: Option<u32>, palettes: Vec<Palette>) -> Result<Self> {
        if palettes.is_empty() {
            return Err(GenerationError::PaletteUnavailable {
                required: PALETTE_SIZE,
            });
        }
        let mut rng = XorShift32::from_optional_seed(seed);
        let seed_value = rng.state();
        let columns = rng.random_int(GRID_MIN_SPAN, GRID_MAX_SPAN) as usize;
        let rows = rng.random_int(GRID_MIN_SPAN, GRID_MAX_SPAN) as usize;
        let base_palette = rng.random_index(palettes.len());
        let checkpoint = rng.state();
        Ok(Self {
            rng,
            seed: seed_value,
            checkpoint,
            params: LayoutParams {
                columns,
                rows,
                square_size: SQUARE_SIZE,
                margin: MARGIN,
            },
            palettes,
            base_palette,
            replays: 0,
            catalog: PatternCatalog::standard(),
        })
    }

    /// The effective seed of this generator
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// The drawn layout parameters
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Index of the palette the first pass uses
    pub const fn base_palette(&self) -> usize {
        self.base_palette
    }

    /// Number of replay passes run so far
    pub const fn replays(&self) -> usize {
        self.replays
    }

    /// Run the first pass
    ///
    /// Calling this again reproduces the first pass exactly; the checkpoint
    /// is restored at the start of every pass.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::PredicateDeadlock`] when pattern selection
    /// exhausts its retry bound, which a catalog with an always-applicable
    /// entry cannot reach. No partial scene is returned on error.
    pub fn generate(&mut self) -> Result<Scene> {
        self.run_pass(self.base_palette)
    }

    /// Run a replay pass: identical structure, next palette
    ///
    /// Increments the replay index and supplies the palette at
    /// `(base + replays) mod palette count`, so colors change whenever more
    /// than one palette is available while every structural decision
    /// repeats.
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate).
    pub fn regenerate(&mut self) -> Result<Scene> {
        self.replays += 1;
        let index = (self.base_palette + self.replays) % self.palettes.len();
        self.run_pass(index)
    }

    fn run_pass(&mut self, palette_index: usize) -> Result<Scene> {
        self.rng.restore(self.checkpoint)?;
        let palette = self
            .palettes
            .get(palette_index)
            .cloned()
            .ok_or(GenerationError::PaletteUnavailable {
                required: PALETTE_SIZE,
            })?;

        // The urn draws from a forked sub-stream so color consumption and
        // structural decisions cannot desynchronize each other
        let urn_rng = self.rng.fork();
        let mut state = PassState {
            urn: Urn::new(palette.colors().to_vec(), urn_rng)?,
            occupancy: OccupancyMap::new(self.params.columns, self.params.rows),
            decisions: Vec::new(),
        };

        let page_color = mix(
            mix(state.urn.pick(), state.urn.pick(), 0.5),
            WHITE,
            BACKDROP_LIGHTEN,
        );

        let mut grid = Element::new("g");
        for x in 0..self.params.columns {
            for y in 0..self.params.rows {
                self.place(&mut state, &mut grid, (x, y), (x as f64, y as f64), Scale::Full)?;
            }
        }

        let root = self.assemble_document(grid, page_color, &palette);
        Ok(Scene {
            root,
            page_color,
            occupancy: state.occupancy,
            decisions: state.decisions,
            palette,
        })
    }

    /// Place one block: colors, occupancy, pattern selection, application
    ///
    /// `cell` is the originating grid cell; `offset` is the translation in
    /// cell units relative to `parent`, fractional for quadrants.
    fn place(
        &mut self,
        state: &mut PassState,
        parent: &mut Element,
        cell: (usize, usize),
        offset: (f64, f64),
        scale: Scale,
    ) -> Result<()> {
        let (column, row) = cell;
        if scale == Scale::Full && state.occupancy.is_claimed(column, row) {
            return Ok(());
        }

        let background = state.urn.pick();
        let foreground = state.urn.pick();
        let size = self.params.square_size;
        let mut group = Element::new("g").attr(
            "transform",
            format!(
                "translate({}, {}) scale({})",
                format_number(offset.0 * size),
                format_number(offset.1 * size),
                format_number(scale.factor()),
            ),
        );

        match scale {
            Scale::Full => {
                state.occupancy.claim(column, row);
            }
            Scale::Double => {
                // The merge claims the right, lower, and diagonal neighbors
                // for the placement that originated at `cell`
                if let Some(id) = state.occupancy.owner(column, row) {
                    state.occupancy.claim_for(column + 1, row, id);
                    state.occupancy.claim_for(column, row + 1, id);
                    state.occupancy.claim_for(column + 1, row + 1, id);
                }
            }
            Scale::Half => {}
        }

        group.append(fill_rect(0.0, 0.0, size, size, background));

        let (pattern, entry) = self.select_pattern(&state.occupancy, column, row, scale)?;
        state.decisions.push(PlacementDecision {
            pattern,
            scale,
            column,
            row,
        });

        match entry.kind {
            PatternKind::Draw(procedure) => {
                let mut context = DrawContext {
                    rng: &mut self.rng,
                    size,
                };
                procedure(&mut context, &mut group, foreground, background);
            }
            PatternKind::Subdivide => {
                for quadrant in QUADRANT_OFFSETS {
                    self.place(state, &mut group, cell, quadrant, Scale::Half)?;
                }
            }
            PatternKind::Merge => {
                self.place(state, &mut group, cell, (0.0, 0.0), Scale::Double)?;
            }
        }

        parent.append(group);
        Ok(())
    }

    /// Uniform catalog draws, retried while the predicate rejects, bounded
    fn select_pattern(
        &mut self,
        occupancy: &OccupancyMap,
        column: usize,
        row: usize,
        scale: Scale,
    ) -> Result<(usize, PatternSpec)> {
        let context = PatternContext {
            scale,
            column,
            row,
            occupancy,
        };
        for _ in 0..MAX_PATTERN_RETRIES {
            let index = self.rng.random_index(self.catalog.len());
            if let Some(entry) = self.catalog.entries().get(index) {
                if entry.applicability.accepts(&context) {
                    return Ok((index, *entry));
                }
            }
        }
        Err(GenerationError::PredicateDeadlock {
            column,
            row,
            attempts: MAX_PATTERN_RETRIES,
        })
    }

    fn assemble_document(&self, grid: Element, page_color: Rgb, palette: &Palette) -> Element {
        let params = &self.params;
        let margin = params.margin;
        let width = params.width();
        let height = params.height();

        let mut root = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    format_number(-margin),
                    format_number(-margin),
                    format_number(width),
                    format_number(height),
                ),
            )
            .attr("width", format_number(width))
            .attr("height", format_number(height));

        root.append(fill_rect(-margin, -margin, width, height, page_color));
        root.append(
            Element::new("clipPath").attr("id", SQUARE_CLIP_ID).child(
                Element::new("rect")
                    .attr("width", format_number(params.square_size))
                    .attr("height", format_number(params.square_size)),
            ),
        );
        root.append(grid);
        root.append(self.palette_strip(palette));
        root
    }

    /// Legend of the palette along the longer free edge
    fn palette_strip(&self, palette: &Palette) -> Element {
        let params = &self.params;
        let size = params.square_size;
        let band = params.margin / 2.0;
        let count = palette.colors().len() as f64;
        if params.columns > params.rows {
            let width = size * params.columns as f64 / count;
            let mut strip = Element::new("g").attr(
                "transform",
                format!(
                    "translate(0, {})",
                    format_number((params.rows as f64).mul_add(size, band)),
                ),
            );
            for (i, &color) in palette.colors().iter().enumerate() {
                strip.append(fill_rect(i as f64 * width, 0.0, width, band, color));
            }
            strip
        } else {
            let height = size * params.rows as f64 / count;
            let mut strip = Element::new("g").attr(
                "transform",
                format!(
                    "translate({}, 0)",
                    format_number((params.columns as f64).mul_add(size, band)),
                ),
            );
            for (i, &color) in palette.colors().iter().enumerate() {
                strip.append(fill_rect(0.0, i as f64 * height, band, height, color));
            }
            strip
        }
    }
}

fn fill_rect(x: f64, y: f64, width: f64, height: f64, fill: Rgb) -> Element {
    Element::new("rect")
        .attr("x", format_number(x))
        .attr("y", format_number(y))
        .attr("width", format_number(width))
        .attr("height", format_number(height))
        .attr("fill", fill)
}
