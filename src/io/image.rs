//! PNG export
//!
//! The render buffer keeps row 0 at the bottom of the scene (y grows
//! upward); PNG rows run top-down, so export flips vertically while
//! quantizing to 8-bit channels.

use crate::io::error::{RenderError, Result};
use crate::render::color::Rgb;
use image::{ImageBuffer, Rgb as ImageRgb};
use ndarray::Array2;
use std::path::Path;

/// Save a render buffer as a PNG file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written to the given path.
pub fn save_png(buffer: &Array2<Rgb>, path: &Path) -> Result<()> {
    let (rows, cols) = buffer.dim();
    let mut img = ImageBuffer::new(cols as u32, rows as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = rows - 1 - y as usize;
        let color = buffer
            .get((row, x as usize))
            .copied()
            .unwrap_or_default()
            .to_u8();
        *pixel = ImageRgb(color);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| RenderError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
