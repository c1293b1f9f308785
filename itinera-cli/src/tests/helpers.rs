//! Temporary workspaces holding catalogs and requests for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` under the workspace and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("write workspace file");
        path
    }

    /// Install the seed catalog and return its path.
    pub(super) fn seeded_catalog(&self) -> Utf8PathBuf {
        let path = self.root.join("catalog.json");
        itinera_catalog::write_seed_catalog(&path).expect("seed catalog");
        path
    }
}

/// Decode captured command output as JSON.
pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}
