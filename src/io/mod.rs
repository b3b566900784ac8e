//! Image decode/encode boundary and output naming.

mod atlas;
mod png;
mod staged;

pub use atlas::{stage_atlas_json, write_atlas_json, AtlasMeta, Frame};
pub use png::{load_pixmap, stage_png, write_png};
pub use staged::StagedFile;

use std::path::{Path, PathBuf};

/// Default output path: `<stem>_padded.png` next to the input.
///
/// The extension is dropped whatever its length, so `tiles.jpeg` and
/// `tiles` both become `tiles_padded.png`.
pub fn padded_path(input: &Path) -> PathBuf {
    sibling_with_suffix(input, "_padded.png")
}

/// Path of the atlas sidecar for an output image: same stem, `.json`.
pub fn atlas_path(output: &Path) -> PathBuf {
    output.with_extension("json")
}

fn sibling_with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tileset");
    let name = format!("{}{}", stem, suffix);
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
