//! Graph documents on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A graph file inside its own temporary directory.
///
/// The directory is removed when the value is dropped, so keep it alive for
/// as long as the path is used.
pub struct GraphFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl GraphFile {
    /// Write `content` to `name` inside a fresh temporary directory.
    pub fn with_content(name: &str, content: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(name);
        fs::write(&path, content)
            .unwrap_or_else(|err| panic!("GraphFile: failed to write {}: {err}", path.display()));
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file in place.
    pub fn rewrite(&self, content: &str) {
        fs::write(&self.path, content).unwrap();
    }
}
