//! PNG encoding and atomic file replacement.

use std::io::{Cursor, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tempfile::NamedTempFile;

use crate::error::PlaceholderError;

/// Encode an image as PNG in memory.
///
/// # Errors
///
/// Returns an error if the encoder fails.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, PlaceholderError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| PlaceholderError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Save an image as PNG, replacing any existing file at `output_path`.
///
/// The bytes go to a temporary file next to the destination which is then
/// renamed into place, so the destination never holds a partial PNG.
///
/// # Errors
///
/// Returns an error if the destination directory is missing or not
/// writable, or if encoding fails.
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<(), PlaceholderError> {
    let bytes = encode_png(image)?;

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        PlaceholderError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot write to {}: {e}", dir.display()),
        ))
    })?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    // Temp files are created 0600; the placeholder is a public asset.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    tmp.persist(output_path).map_err(|e| PlaceholderError::Io(e.error))?;

    tracing::debug!(path = %output_path.display(), bytes = bytes.len(), "wrote PNG");
    Ok(())
}
