//! Loading sheets and writing padded PNGs.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{PaddingError, Result};
use crate::types::{Colour, Pixmap};

use super::StagedFile;

/// Decode any supported image format into an RGBA pixmap.
pub fn load_pixmap(path: &Path) -> Result<Pixmap> {
    if !path.exists() {
        return Err(PaddingError::Decode {
            path: path.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    let img = image::open(path)
        .map_err(|e| PaddingError::Decode {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    Ok(Pixmap::from_fn(img.width(), img.height(), |x, y| {
        Colour::from_rgba(img.get_pixel(x, y).0)
    }))
}

/// Write a pixmap as an RGBA PNG, regardless of the path's extension.
///
/// The image is encoded to a hidden sibling file first and renamed into
/// place, so a failed write never leaves a truncated output behind.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    stage_png(pixmap, path)?.commit()
}

/// Encode a pixmap as an RGBA PNG beside `path` without replacing it yet.
pub fn stage_png(pixmap: &Pixmap, path: &Path) -> Result<StagedFile> {
    let raw: Vec<u8> = pixmap.pixels().iter().flat_map(|c| c.to_rgba()).collect();
    let img = RgbaImage::from_raw(pixmap.width(), pixmap.height(), raw).ok_or_else(|| {
        PaddingError::Encode {
            path: path.to_path_buf(),
            message: "Pixel buffer does not match image dimensions".to_string(),
        }
    })?;

    StagedFile::create(path, |partial| {
        img.save_with_format(partial, ImageFormat::Png)
            .map_err(|e| PaddingError::Encode {
                path: path.to_path_buf(),
                message: format!("Failed to write PNG: {}", e),
            })
    })
}
