//! Label font port: measures and draws a line of text onto a canvas.

use image::{Rgb, RgbImage};

/// Ink bounding box of a piece of text, relative to its draw origin.
///
/// `left`/`top` are the offsets of the first lit pixel from the `(x, y)`
/// passed to [`LabelFont::draw`]; `width`/`height` are the ink extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    /// Horizontal offset of the ink from the draw origin.
    pub left: i32,
    /// Vertical offset of the ink from the draw origin.
    pub top: i32,
    /// Ink width in pixels.
    pub width: u32,
    /// Ink height in pixels.
    pub height: u32,
}

/// A font that can lay out a single line of text.
pub trait LabelFont {
    /// Human-readable name of the font, used in diagnostics.
    fn name(&self) -> &str;

    /// Measure the ink bounding box of `text` drawn at the origin.
    fn measure(&self, text: &str) -> TextBounds;

    /// Draw `text` onto `canvas` with its draw origin at `(x, y)`.
    ///
    /// Pixels falling outside the canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str);
}
