//! Tile padding with edge bleed.
//!
//! Padding runs in three strictly ordered phases:
//! 1. allocate a transparent canvas sized for the padded grid
//! 2. copy every tile to the centre of its padded cell
//! 3. bleed tile edges outward, columns first and rows second

mod bleed;

pub use bleed::{bleed_columns, bleed_rows};

use crate::error::Result;
use crate::types::{Pixmap, TileGrid};

/// Pad every `tile_width x tile_height` tile of `source` by `padding` pixels
/// on each side, filling the gaps with the tile's edge colours.
///
/// The source is left untouched; a new pixmap is returned.
pub fn pad(source: &Pixmap, tile_width: u32, tile_height: u32, padding: u32) -> Result<Pixmap> {
    let grid = TileGrid::new(
        source.width(),
        source.height(),
        tile_width,
        tile_height,
        padding,
    )?;
    Ok(pad_grid(source, &grid))
}

/// Pad `source` using an already validated grid.
///
/// `grid` must have been built for the source's dimensions.
pub fn pad_grid(source: &Pixmap, grid: &TileGrid) -> Pixmap {
    debug_assert_eq!(grid.source_size(), source.dimensions());

    let (width, height) = grid.padded_size();
    let mut canvas = Pixmap::new(width, height);

    relocate_tiles(source, &mut canvas, grid);
    bleed_columns(&mut canvas, grid);
    bleed_rows(&mut canvas, grid);

    canvas
}

/// Copy each tile into its padded position, leaving the gaps transparent.
fn relocate_tiles(source: &Pixmap, canvas: &mut Pixmap, grid: &TileGrid) {
    for (col, row) in grid.tiles() {
        let (sx, sy) = grid.source_origin(col, row);
        let (dx, dy) = grid.padded_origin(col, row);
        canvas.copy_from(source, sx, sy, grid.tile_width(), grid.tile_height(), dx, dy);
    }
}
