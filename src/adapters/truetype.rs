//! TrueType/OpenType adapter backed by `ab_glyph` and `imageproc`.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use crate::error::FontError;
use crate::ports::label_font::{LabelFont, TextBounds};

/// A TrueType font loaded from disk at a fixed pixel size.
pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
    name: String,
    path: PathBuf,
}

impl TrueTypeFont {
    /// Load a font file at the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid font.
    pub fn load(path: &Path, size: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path)
            .map_err(|source| FontError::Io { path: path.to_path_buf(), source })?;
        let font = FontVec::try_from_vec(data)
            .map_err(|source| FontError::Invalid { path: path.to_path_buf(), source })?;
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        Ok(Self { font, scale: PxScale::from(size), name, path: path.to_path_buf() })
    }

    /// Path the font was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lay out `text` the same way `imageproc::drawing::draw_text_mut` does,
    /// calling `f` for each outlined glyph.
    fn layout(&self, text: &str, mut f: impl FnMut(OutlinedGlyph)) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0;
        let mut prev = None;
        for c in text.chars() {
            let id = self.font.glyph_id(c);
            let glyph = id.with_scale_and_position(self.scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                if let Some(prev) = prev {
                    caret += scaled.kern(id, prev);
                }
                prev = Some(id);
                f(outlined);
            }
        }
    }
}

impl LabelFont for TrueTypeFont {
    fn name(&self) -> &str {
        &self.name
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn measure(&self, text: &str) -> TextBounds {
        let mut ink: Option<(f32, f32, f32, f32)> = None;
        self.layout(text, |glyph| {
            let bb = glyph.px_bounds();
            let (min_x, min_y) = (bb.min.x.round(), bb.min.y.round());
            let (max_x, max_y) = (min_x + bb.width(), min_y + bb.height());
            ink = Some(match ink {
                None => (min_x, min_y, max_x, max_y),
                Some((l, t, r, b)) => (l.min(min_x), t.min(min_y), r.max(max_x), b.max(max_y)),
            });
        });

        ink.map_or_else(TextBounds::default, |(left, top, right, bottom)| TextBounds {
            left: left as i32,
            top: top as i32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }

    fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }
}
