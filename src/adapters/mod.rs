//! Adapter implementations for port traits.
//!
//! - `truetype` — TrueType/OpenType fonts loaded from disk
//! - `builtin` — Built-in bitmap font used as the fallback

pub mod builtin;
pub mod truetype;
