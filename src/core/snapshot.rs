use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::repository::Repository;

pub const SNAPSHOT_FILE: &str = "repository_data.json";

/// Last-fetched repository list, stored as a flat JSON array.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SNAPSHOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the snapshot with `repositories`.
    pub fn save(&self, repositories: &[Repository]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string(repositories)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write snapshot {}", self.path.display()))?;
        tracing::debug!(
            "saved {} repositories to {}",
            repositories.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Returns `None` when the snapshot is missing or unreadable, so the
    /// caller can refresh it.
    pub fn load(&self) -> Option<Vec<Repository>> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(repositories) => Some(repositories),
            Err(e) => {
                tracing::warn!("ignoring unreadable snapshot {}: {}", self.path.display(), e);
                None
            }
        }
    }
}
