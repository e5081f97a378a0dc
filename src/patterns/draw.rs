//! Draw procedures for the always-applicable catalog entries
//!
//! Each procedure appends shapes for one cell into the cell's group. Every
//! random decision draws from the engine stream passed in the context, in a
//! fixed order, because these draws are part of the reproducible sequence.

use crate::color::Rgb;
use crate::io::configuration::SQUARE_CLIP_ID;
use crate::random::{RandomSource, XorShift32};
use crate::render::{Element, format_number};

/// Weighted lattice sizes for the dots pattern; repeats skew the draw
const DOT_COUNTS: [i64; 11] = [1, 2, 2, 3, 3, 3, 4, 4, 5, 6, 7];

/// Characters the glyph pattern draws from
const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPRSTUVWXYZbdfhiklt0123456789!#$%&*?<>";

/// Shared state handed to every draw procedure
pub struct DrawContext<'a> {
    /// Engine stream for the pattern's own random decisions
    pub rng: &'a mut XorShift32,
    /// Cell edge length in user units
    pub size: f64,
}

/// A draw procedure: appends shapes into `group` using the foreground and
/// background colors of the placement
pub type DrawFn = fn(&mut DrawContext<'_>, &mut Element, Rgb, Rgb);

fn circle(cx: f64, cy: f64, r: f64, fill: Rgb) -> Element {
    Element::new("circle")
        .attr("cx", format_number(cx))
        .attr("cy", format_number(cy))
        .attr("r", format_number(r))
        .attr("fill", fill)
}

fn rect(x: f64, y: f64, width: f64, height: f64, fill: Rgb) -> Element {
    Element::new("rect")
        .attr("x", format_number(x))
        .attr("y", format_number(y))
        .attr("width", format_number(width))
        .attr("height", format_number(height))
        .attr("fill", fill)
}

/// Full-cell disc, sometimes with a concentric hole in the background color
pub fn circle_with_hole(ctx: &mut DrawContext<'_>, group: &mut Element, fg: Rgb, bg: Rgb) {
    let half = ctx.size / 2.0;
    group.append(circle(half, half, half, fg));
    if ctx.rng.coin_toss() {
        let divisor = ctx.rng.random_int(3, 6);
        group.append(circle(half, half, ctx.size / divisor as f64, bg));
    }
}

/// Two half-size discs on opposite corners, clipped to the square
pub fn opposed_circles(ctx: &mut DrawContext<'_>, group: &mut Element, fg: Rgb, _bg: Rgb) {
    let size = ctx.size;
    let flip = ctx.rng.coin_toss();
    let clip = format!("url(#{SQUARE_CLIP_ID})");
    group.append(
        circle(if flip { size } else { 0.0 }, 0.0, size / 2.0, fg).attr("clip-path", clip.clone()),
    );
    group.append(
        circle(if flip { 0.0 } else { size }, size, size / 2.0, fg).attr("clip-path", clip),
    );
}

/// An `n × n` lattice of dots, `n` drawn from a weighted list
pub fn dot_matrix(ctx: &mut DrawContext<'_>, group: &mut Element, fg: Rgb, _bg: Rgb) {
    let n = ctx.rng.random_item(&DOT_COUNTS).copied().unwrap_or(3);
    let spacing = ctx.size / n as f64;
    let radius = spacing / 4.0;
    for x in 0..n {
        for y in 0..n {
            group.append(circle(
                (x as f64).mul_add(spacing, spacing / 2.0),
                (y as f64).mul_add(spacing, spacing / 2.0),
                radius,
                fg,
            ));
        }
    }
}

/// Alternating stripes, horizontal or vertical on a coin toss
pub fn bars(ctx: &mut DrawContext<'_>, group: &mut Element, fg: Rgb, _bg: Rgb) {
    let size = ctx.size;
    let horizontal = ctx.rng.coin_toss();
    let n = ctx.rng.random_int(2, 10);
    let band = size / n as f64;
    let mut i = 0;
    while i < n {
        let offset = i as f64 * band;
        if horizontal {
            group.append(rect(0.0, offset, size, band, fg));
        } else {
            group.append(rect(offset, 0.0, band, size, fg));
        }
        i += 2;
    }
}

/// Plus shape, rotated 45 degrees on a coin-style draw
pub fn cross(ctx: &mut DrawContext<'_>, group: &mut Element, fg: Rgb, _bg: Rgb) {
    let size = ctx.size;
    let half = size / 2.0;
    let arm = format_number(size / 4.0);
    let back = format_number(-size / 4.0);
    let angle = 45 * ctx.rng.random_int(0, 1);
    let d = format!(
        "M{},{}h{arm}v{arm}h{arm}v{arm}h{back}v{arm}h{back}v{back}h{back}v{back}h{arm}z",
        format_number(3.0 * size / 8.0),
        format_number(size / 8.0),
    );
    group.append(
        Element::new("path")
            .attr("fill", fg)
            .attr("d", d)
            .attr(
                "transform",
                format!(
                    "translate({half}, {half}) rotate({angle}) translate({nhalf}, {nhalf})",
                    half = format_number(half),
                    nhalf = format_number(-half),
                ),
            ),
    );
}

/// One of the two corner triangles covering half the cell
pub fn diagonal_half(ctx: &mut DrawContext<'_>, group: &mut Element, fg: Rgb, _bg: Rgb) {
    let size = format_number(ctx.size);
    let d = if ctx.rng.random_int(0, 1) == 0 {
        format!("M0,0H{size}V{size}z")
    } else {
        format!("M0,0H{size}L0,{size}z")
    };
    group.append(Element::new("path").attr("d", d).attr("fill", fg));
}

/// A single oversized monospace character at a quarter-turn rotation
pub fn glyph(ctx: &mut DrawContext<'_>, group: &mut Element, fg: Rgb, _bg: Rgb) {
    let size = ctx.size;
    let half = format_number(size / 2.0);
    let nhalf = format_number(-size / 2.0);
    let angle = 90 * ctx.rng.random_int(0, 3);
    let character = ctx.rng.random_item(GLYPHS).copied().unwrap_or(b'?') as char;
    let mut text = Element::new("text")
        .attr("font-family", "ui-monospace")
        .attr("font-weight", 800)
        .attr("font-size", format_number(size * 1.1))
        .attr("text-anchor", "middle")
        .attr("alignment-baseline", "central")
        .attr("dominant-baseline", "middle")
        .attr("x", half.clone())
        .attr("y", half.clone())
        .attr("fill", fg)
        .attr(
            "transform",
            format!("translate({half}, {half}) rotate({angle}) translate({nhalf}, {nhalf})"),
        );
    text.append_text(&character.to_string());
    group.append(text);
}
