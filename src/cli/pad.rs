//! Pad command implementation.
//!
//! Loads a tileset, pads every tile with bled edge colours and writes the
//! result as a PNG, optionally with atlas metadata.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use crate::error::{PaddingError, Result};
use crate::io::{atlas_path, load_pixmap, padded_path, stage_atlas_json, stage_png, AtlasMeta};
use crate::output::{display_path, plural, Printer};
use crate::pad::pad_grid;
use crate::types::TileGrid;

use super::{usage_error, Cli};

/// Padding applied when the fourth argument is omitted.
pub const DEFAULT_PADDING: u32 = 1;

/// Resolved, type-checked arguments for a single pad run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadArgs {
    pub tileset: PathBuf,
    pub tile_width: u32,
    pub tile_height: u32,
    pub padding: u32,
    pub output: Option<PathBuf>,
    pub json: bool,
}

impl PadArgs {
    /// Check the positional arguments and parse the integers.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let (Some(tileset), Some(width), Some(height)) =
            (cli.tileset, cli.tile_width, cli.tile_height)
        else {
            return Err(usage_error());
        };

        let tile_width = parse_tile_dimension("tile width", &width)?;
        let tile_height = parse_tile_dimension("tile height", &height)?;
        let padding = match cli.padding {
            Some(p) => parse_number("padding", &p)?,
            None => DEFAULT_PADDING,
        };

        Ok(Self {
            tileset,
            tile_width,
            tile_height,
            padding,
            output: cli.output,
            json: cli.json,
        })
    }

    /// Where the padded image goes.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| padded_path(&self.tileset))
    }
}

/// Parse a non-negative integer argument.
fn parse_number(name: &str, value: &OsStr) -> Result<u32> {
    let parsed = value.to_str().and_then(|v| v.trim().parse::<u32>().ok());
    parsed.ok_or_else(|| {
        let value = value.to_string_lossy();
        let negative = value.trim().parse::<i64>().map_or(false, |n| n < 0);
        PaddingError::Argument {
            message: if negative {
                format!("{} must not be negative, got '{}'", name, value)
            } else {
                format!("{} must be an integer, got '{}'", name, value)
            },
            help: Some(format!("Pass {} as a whole number of pixels", name)),
        }
    })
}

fn parse_tile_dimension(name: &str, value: &OsStr) -> Result<u32> {
    let n = parse_number(name, value)?;
    if n == 0 {
        return Err(PaddingError::Argument {
            message: format!("{} must be non-zero", name),
            help: Some(format!("{} must be at least 1", name)),
        });
    }
    Ok(n)
}

pub fn run(args: &PadArgs, printer: &Printer) -> Result<PathBuf> {
    let output = args.output_path();
    if args.json && atlas_path(&output) == output {
        return Err(PaddingError::Argument {
            message: format!(
                "atlas metadata would overwrite the padded image {}",
                display_path(&output)
            ),
            help: Some("Give --output a .png extension when using --json".to_string()),
        });
    }

    printer.status("Loading", &display_path(&args.tileset));
    let source = load_pixmap(&args.tileset)?;

    let grid = TileGrid::new(
        source.width(),
        source.height(),
        args.tile_width,
        args.tile_height,
        args.padding,
    )?;

    printer.info(
        "Analyzed",
        &format!(
            "{}x{} image, {}x{} grid of {}x{} tiles",
            source.width(),
            source.height(),
            grid.columns(),
            grid.rows(),
            grid.tile_width(),
            grid.tile_height()
        ),
    );
    let (stride_x, stride_y) = grid.cell_stride();
    printer.verbose("Cell", &format!("{}x{} stride", stride_x, stride_y));

    if args.padding == 0 {
        printer.warning("Warning", "padding is 0; output will match the input");
    }

    printer.status(
        "Padding",
        &format!(
            "{} ({}px)",
            plural(grid.tile_count() as usize, "tile", "tiles"),
            args.padding
        ),
    );
    let padded = pad_grid(&source, &grid);

    // Both files are fully written before either replaces anything
    printer.status("Writing", &display_path(&output));
    let png = stage_png(&padded, &output)?;

    let sidecar = if args.json {
        let image_name = output
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let prefix = args
            .tileset
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("tile");
        let meta = AtlasMeta::from_grid(&grid, image_name, prefix);
        let json_path = atlas_path(&output);
        printer.status("Writing", &display_path(&json_path));
        Some(stage_atlas_json(&meta, &json_path)?)
    } else {
        None
    };

    png.commit()?;
    if let Some(sidecar) = sidecar {
        if let Err(e) = sidecar.commit() {
            let _ = fs::remove_file(&output);
            return Err(e);
        }
    }

    let (w, h) = padded.dimensions();
    printer.status(
        "Finished",
        &format!("{}x{} -> {}x{}", source.width(), source.height(), w, h),
    );

    Ok(output)
}
