//! Tile grid geometry.
//!
//! Maps tile coordinates between the source sheet and the padded output,
//! where every tile sits centred in a cell of `tile + 2 * padding` pixels.

use crate::error::{PaddingError, Result};

/// Largest padded canvas, in bytes, that can back a `Vec` of RGBA pixels.
const MAX_CANVAS_BYTES: u64 = isize::MAX as u64;

/// A validated, uniform grid of tiles over a sheet.
///
/// Fields are private so the padded size and stride, checked for overflow
/// in `new`, stay consistent with the tile geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    tile_width: u32,
    tile_height: u32,
    padding: u32,
    columns: u32,
    rows: u32,
    stride: (u32, u32),
    padded: (u32, u32),
}

impl TileGrid {
    /// Build the grid for an image of `image_width x image_height`.
    ///
    /// Tile dimensions must be non-zero and divide the image exactly;
    /// partial trailing tiles are rejected rather than padded.
    pub fn new(
        image_width: u32,
        image_height: u32,
        tile_width: u32,
        tile_height: u32,
        padding: u32,
    ) -> Result<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(PaddingError::Argument {
                message: format!(
                    "Tile dimensions must be non-zero, got {}x{}",
                    tile_width, tile_height
                ),
                help: Some("Both tile width and tile height must be at least 1".to_string()),
            });
        }

        if image_width == 0 || image_height == 0 {
            return Err(PaddingError::Geometry {
                message: format!("Image has zero dimensions ({}x{})", image_width, image_height),
                help: Some("Input image must have non-zero width and height".to_string()),
            });
        }

        if image_width % tile_width != 0 {
            return Err(PaddingError::Geometry {
                message: format!(
                    "Image width {} is not divisible by tile width {}",
                    image_width, tile_width
                ),
                help: Some(format!(
                    "Use a tile width that divides {} (leftover column of {}px)",
                    image_width,
                    image_width % tile_width
                )),
            });
        }

        if image_height % tile_height != 0 {
            return Err(PaddingError::Geometry {
                message: format!(
                    "Image height {} is not divisible by tile height {}",
                    image_height, tile_height
                ),
                help: Some(format!(
                    "Use a tile height that divides {} (leftover row of {}px)",
                    image_height,
                    image_height % tile_height
                )),
            });
        }

        let columns = image_width / tile_width;
        let rows = image_height / tile_height;

        let too_large = || PaddingError::Geometry {
            message: format!(
                "Padding {} is too large for a {}x{} grid of {}x{} tiles",
                padding, columns, rows, tile_width, tile_height
            ),
            help: Some("The padded image must fit in 32-bit dimensions and in memory".to_string()),
        };

        let stride_x = padded_extent(tile_width, padding, 1).ok_or_else(too_large)?;
        let stride_y = padded_extent(tile_height, padding, 1).ok_or_else(too_large)?;
        let padded_w = padded_extent(image_width, padding, columns).ok_or_else(too_large)?;
        let padded_h = padded_extent(image_height, padding, rows).ok_or_else(too_large)?;

        let bytes = (padded_w as u64)
            .checked_mul(padded_h as u64)
            .and_then(|n| n.checked_mul(4));
        if !matches!(bytes, Some(n) if n <= MAX_CANVAS_BYTES) {
            return Err(too_large());
        }

        Ok(Self {
            tile_width,
            tile_height,
            padding,
            columns,
            rows,
            stride: (stride_x, stride_y),
            padded: (padded_w, padded_h),
        })
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Pixels added on each side of every tile.
    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Size of the unpadded source sheet.
    pub fn source_size(&self) -> (u32, u32) {
        (self.columns * self.tile_width, self.rows * self.tile_height)
    }

    /// Size of the padded output: each tile gains `padding` on both sides.
    pub fn padded_size(&self) -> (u32, u32) {
        self.padded
    }

    /// Distance between the starts of neighbouring cells in the output.
    pub fn cell_stride(&self) -> (u32, u32) {
        self.stride
    }

    pub fn tile_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Top-left pixel of tile `(col, row)` in the source sheet.
    pub fn source_origin(&self, col: u32, row: u32) -> (u32, u32) {
        (col * self.tile_width, row * self.tile_height)
    }

    /// Top-left pixel of tile `(col, row)` in the padded output.
    pub fn padded_origin(&self, col: u32, row: u32) -> (u32, u32) {
        (
            col * self.tile_width + (2 * col + 1) * self.padding,
            row * self.tile_height + (2 * row + 1) * self.padding,
        )
    }

    /// All tile coordinates as `(col, row)`, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32)> {
        let (columns, rows) = (self.columns, self.rows);
        (0..rows).flat_map(move |row| (0..columns).map(move |col| (col, row)))
    }
}

/// `length + count * padding * 2`, or `None` if it doesn't fit in a `u32`.
fn padded_extent(length: u32, padding: u32, count: u32) -> Option<u32> {
    count
        .checked_mul(padding)
        .and_then(|n| n.checked_mul(2))
        .and_then(|n| n.checked_add(length))
}
