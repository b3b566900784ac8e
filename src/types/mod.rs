//! Core domain types for padding.
//!
//! - `Colour` - RGBA colour values
//! - `Pixmap` - Owned pixel grid, independent of any image library
//! - `TileGrid` - Validated tile geometry for a sheet and its padded output

mod colour;
mod grid;
mod pixmap;

pub use colour::Colour;
pub use grid::TileGrid;
pub use pixmap::Pixmap;
