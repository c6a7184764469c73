// Filesystem snapshot store
//
// Persists the published snapshot as a single JSON blob. Each publish writes
// a temp file and renames it over the previous blob, so readers always see a
// complete snapshot from one cycle or another, never a partial write.
use crate::application::snapshot_store::{Snapshot, SnapshotStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

const SNAPSHOT_FILE: &str = "all_wells_ip.json";

pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn publish(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_vec(snapshot).context("Failed to serialize snapshot")?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create store directory {}", self.dir.display()))?;

        let path = self.snapshot_path();
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        tracing::debug!(path = %path.display(), bytes = json.len(), "wrote snapshot");
        Ok(())
    }

    async fn load(&self) -> Result<Snapshot> {
        let path = self.snapshot_path();
        let json = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        serde_json::from_slice(&json).context("Failed to parse snapshot")
    }
}
