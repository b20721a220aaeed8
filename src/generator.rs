//! Placeholder image generation: canvas, label layout and rendering.

use std::path::PathBuf;

use image::{Rgb, RgbImage};

use crate::error::PlaceholderError;
use crate::font::{select_font, FontSource};
use crate::output::save_png;
use crate::ports::{LabelFont, TextBounds};

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 256;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 256;
/// Background color, `#333333`.
pub const BACKGROUND: Rgb<u8> = Rgb([0x33, 0x33, 0x33]);
/// Label text.
pub const LABEL: &str = "TV";
/// Label color.
pub const LABEL_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
/// Font size in pixels.
pub const FONT_SIZE: f32 = 40.0;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Where the PNG was written.
    pub path: PathBuf,
    /// Font that rendered the label.
    pub font: FontSource,
}

/// Generates the placeholder PNG.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    font_name: String,
    output: PathBuf,
}

impl PlaceholderGenerator {
    /// Create a generator that tries `font_name` and writes to `output`.
    #[must_use]
    pub fn new(font_name: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self { font_name: font_name.into(), output: output.into() }
    }

    /// Render the placeholder and write it to the output path.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG cannot be encoded or written. Font
    /// problems are never errors; the built-in font is used instead.
    pub fn generate(&self) -> Result<GenerationReport, PlaceholderError> {
        let selected = select_font(&self.font_name, FONT_SIZE);
        let canvas = render_placeholder(selected.font.as_ref());
        save_png(&canvas, &self.output)?;

        tracing::info!(path = %self.output.display(), font = %selected.source, "placeholder written");
        Ok(GenerationReport { path: self.output.clone(), font: selected.source })
    }
}

/// Draw the label centered on a fresh background canvas.
#[must_use]
pub fn render_placeholder(font: &dyn LabelFont) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    let bounds = font.measure(LABEL);
    let (x, y) = label_origin(bounds, CANVAS_WIDTH, CANVAS_HEIGHT);
    tracing::debug!(font = font.name(), ?bounds, x, y, "drawing label");
    font.draw(&mut canvas, LABEL_COLOR, x, y, LABEL);
    canvas
}

/// Draw origin that centers text with the given ink bounds.
///
/// The ink's top-left lands at `((width - w) / 2, (height - h) / 2)`; the
/// bounds' own offset from the draw origin is subtracted out.
#[must_use]
pub fn label_origin(bounds: TextBounds, width: u32, height: u32) -> (i32, i32) {
    let center = |canvas: u32, ink: u32| (i64::from(canvas) - i64::from(ink)).div_euclid(2);
    let x = center(width, bounds.width) - i64::from(bounds.left);
    let y = center(height, bounds.height) - i64::from(bounds.top);
    (clamp_i32(x), clamp_i32(y))
}

#[allow(clippy::cast_possible_truncation)]
fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
