//! Edge bleed passes.
//!
//! Each pass walks outward from a tile edge, copying the previous column
//! (or row) one step further, `padding` times. Columns run first across the
//! whole canvas; rows run second, so corner padding picks up the colour
//! already bled sideways and repeats it vertically.

use crate::types::{Pixmap, TileGrid};

/// Fill the left and right padding of every cell from the tile edge columns.
pub fn bleed_columns(canvas: &mut Pixmap, grid: &TileGrid) {
    let (stride, _) = grid.cell_stride();
    let width = canvas.width();
    let padding = grid.padding();

    for x in (0..width).step_by(stride as usize) {
        for x1 in (x + 1..=x + padding).rev() {
            canvas.copy_column(x1, x1 - 1);
        }
    }

    // Rightmost tile column of each cell
    for x in (padding + grid.tile_width() - 1..width).step_by(stride as usize) {
        for x1 in x..x + padding {
            canvas.copy_column(x1, x1 + 1);
        }
    }
}

/// Fill the top and bottom padding of every cell from the tile edge rows.
pub fn bleed_rows(canvas: &mut Pixmap, grid: &TileGrid) {
    let (_, stride) = grid.cell_stride();
    let height = canvas.height();
    let padding = grid.padding();

    for y in (0..height).step_by(stride as usize) {
        for y1 in (y + 1..=y + padding).rev() {
            canvas.copy_row(y1, y1 - 1);
        }
    }

    for y in (padding + grid.tile_height() - 1..height).step_by(stride as usize) {
        for y1 in y..y + padding {
            canvas.copy_row(y1, y1 + 1);
        }
    }
}
