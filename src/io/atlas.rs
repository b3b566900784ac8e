//! Atlas metadata sidecar for padded sheets.
//!
//! Written in TexturePacker's JSON hash layout, with an extra `grid` block
//! carrying the offset and spacing that grid-based atlas loaders expect.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{PaddingError, Result};
use crate::types::TileGrid;

use super::StagedFile;

/// A tile's rectangle in the padded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Layout of a padded sheet.
#[derive(Debug, Clone)]
pub struct AtlasMeta {
    pub frames: Vec<Frame>,
    pub image: String,
    pub size: (u32, u32),
    pub grid: TileGrid,
}

impl AtlasMeta {
    /// Describe every tile of `grid` once padded, naming frames
    /// `<prefix>-<row>-<col>`.
    pub fn from_grid(grid: &TileGrid, image: &str, prefix: &str) -> Self {
        let frames = grid
            .tiles()
            .map(|(col, row)| {
                let (x, y) = grid.padded_origin(col, row);
                Frame {
                    name: format!("{}-{}-{}", prefix, row, col),
                    x,
                    y,
                    w: grid.tile_width(),
                    h: grid.tile_height(),
                }
            })
            .collect();

        Self {
            frames,
            image: image.to_string(),
            size: grid.padded_size(),
            grid: *grid,
        }
    }
}

/// Write atlas metadata as JSON.
pub fn write_atlas_json(meta: &AtlasMeta, path: &Path) -> Result<()> {
    stage_atlas_json(meta, path)?.commit()
}

/// Serialize atlas metadata beside `path` without replacing it yet.
pub fn stage_atlas_json(meta: &AtlasMeta, path: &Path) -> Result<StagedFile> {
    let output = AtlasJson::from_meta(meta);
    let json = serde_json::to_string_pretty(&output).map_err(|e| PaddingError::Encode {
        path: path.to_path_buf(),
        message: format!("Failed to serialize atlas metadata: {}", e),
    })?;
    StagedFile::create(path, |partial| {
        fs::write(partial, json).map_err(|e| PaddingError::Encode {
            path: path.to_path_buf(),
            message: format!("Failed to write atlas metadata: {}", e),
        })
    })
}

// --- JSON serialization types ---

#[derive(Serialize)]
struct AtlasJson {
    frames: BTreeMap<String, JsonFrame>,
    meta: JsonMeta,
}

#[derive(Serialize)]
struct JsonFrame {
    frame: JsonRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: JsonRect,
    #[serde(rename = "sourceSize")]
    source_size: JsonSize,
}

#[derive(Serialize)]
struct JsonRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct JsonSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct JsonMeta {
    app: String,
    version: String,
    image: String,
    size: JsonSize,
    scale: String,
    grid: JsonGrid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonGrid {
    tile_width: u32,
    tile_height: u32,
    columns: u32,
    rows: u32,
    padding: u32,
    offset: u32,
    spacing: u32,
}

impl AtlasJson {
    fn from_meta(meta: &AtlasMeta) -> Self {
        let frames = meta
            .frames
            .iter()
            .map(|f| {
                (
                    f.name.clone(),
                    JsonFrame {
                        frame: JsonRect {
                            x: f.x,
                            y: f.y,
                            w: f.w,
                            h: f.h,
                        },
                        rotated: false,
                        trimmed: false,
                        sprite_source_size: JsonRect {
                            x: 0,
                            y: 0,
                            w: f.w,
                            h: f.h,
                        },
                        source_size: JsonSize { w: f.w, h: f.h },
                    },
                )
            })
            .collect();

        let grid = &meta.grid;
        AtlasJson {
            frames,
            meta: JsonMeta {
                app: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                size: JsonSize {
                    w: meta.size.0,
                    h: meta.size.1,
                },
                scale: "1".to_string(),
                grid: JsonGrid {
                    tile_width: grid.tile_width(),
                    tile_height: grid.tile_height(),
                    columns: grid.columns(),
                    rows: grid.rows(),
                    padding: grid.padding(),
                    offset: grid.padding(),
                    spacing: grid.cell_stride().0 - grid.tile_width(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_frames() {
        let grid = TileGrid::new(4, 2, 2, 2, 1).unwrap();
        let meta = AtlasMeta::from_grid(&grid, "tiles_padded.png", "tiles");

        assert_eq!(meta.size, (8, 4));
        assert_eq!(
            meta.frames,
            vec![
                Frame { name: "tiles-0-0".to_string(), x: 1, y: 1, w: 2, h: 2 },
                Frame { name: "tiles-0-1".to_string(), x: 5, y: 1, w: 2, h: 2 },
            ]
        );
    }

    #[test]
    fn test_write_atlas_json() {
        let grid = TileGrid::new(32, 16, 16, 16, 2).unwrap();
        let meta = AtlasMeta::from_grid(&grid, "dungeon_padded.png", "dungeon");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeon_padded.json");
        write_atlas_json(&meta, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        let frame = &parsed["frames"]["dungeon-0-1"];
        assert_eq!(frame["frame"]["x"], 22);
        assert_eq!(frame["frame"]["y"], 2);
        assert_eq!(frame["frame"]["w"], 16);
        assert_eq!(frame["rotated"], false);
        assert_eq!(frame["sourceSize"]["h"], 16);

        assert_eq!(parsed["meta"]["app"], "padding");
        assert_eq!(parsed["meta"]["image"], "dungeon_padded.png");
        assert_eq!(parsed["meta"]["size"]["w"], 40);
        assert_eq!(parsed["meta"]["size"]["h"], 20);
        assert_eq!(parsed["meta"]["grid"]["tileWidth"], 16);
        assert_eq!(parsed["meta"]["grid"]["offset"], 2);
        assert_eq!(parsed["meta"]["grid"]["spacing"], 4);
    }
}
