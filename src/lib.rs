//! padding - Spritesheet tile padding with edge bleed
//!
//! Inserts uniform padding between the tiles of a grid-tiled spritesheet and
//! fills it by replicating each tile's edge pixels outward, so textures
//! sampled with filtering don't pick up colour from neighbouring tiles.

pub mod cli;
pub mod error;
pub mod io;
pub mod output;
pub mod pad;
pub mod types;

pub use error::{PaddingError, Result};
pub use io::{load_pixmap, padded_path, write_atlas_json, write_png, AtlasMeta, Frame};
pub use pad::{bleed_columns, bleed_rows, pad, pad_grid};
pub use types::{Colour, Pixmap, TileGrid};
