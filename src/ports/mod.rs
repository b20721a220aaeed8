//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator and a font
//! backend. Implementations live in `src/adapters/`.

pub mod label_font;

pub use label_font::{LabelFont, TextBounds};
