//! Outputs written beside their destination and renamed into place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaddingError, Result};

/// A fully written file waiting under a hidden `.partial` name.
///
/// `commit` renames it over the destination. Dropping it uncommitted
/// removes the partial file.
#[derive(Debug)]
pub struct StagedFile {
    partial: PathBuf,
    dest: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Run `write` against the partial path for `dest`.
    pub fn create(dest: &Path, write: impl FnOnce(&Path) -> Result<()>) -> Result<Self> {
        let staged = Self {
            partial: partial_path(dest),
            dest: dest.to_path_buf(),
            committed: false,
        };
        write(&staged.partial)?;
        Ok(staged)
    }

    /// Move the staged file into place.
    pub fn commit(mut self) -> Result<()> {
        fs::rename(&self.partial, &self.dest).map_err(|e| PaddingError::Encode {
            path: self.dest.clone(),
            message: format!("Failed to move output into place: {}", e),
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.partial);
        }
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("output");
    path.with_file_name(format!(".{}.partial", name))
}
