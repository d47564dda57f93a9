//! Snapshot provider
//! Reuses the most recent successful fetch, cached as JSON under the
//! user cache directory

use super::ZoneProvider;
use crate::types::ZoneRecord;
use crate::utils::paths;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::fs;

pub struct SnapshotProvider;

impl SnapshotProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Write a freshly fetched snapshot to the cache. Callers treat a
/// failure here as non-fatal; the fetch already succeeded.
pub fn save_snapshot(zones: &[ZoneRecord]) -> Result<()> {
    let path = paths::snapshot_file().ok_or_else(|| anyhow!("no cache directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string(zones)?)
        .with_context(|| format!("writing snapshot to {}", path.display()))?;
    Ok(())
}

#[async_trait]
impl ZoneProvider for SnapshotProvider {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn display_name(&self) -> &'static str {
        "Cached snapshot"
    }

    async fn is_available(&self) -> bool {
        paths::snapshot_file().map(|p| p.exists()).unwrap_or(false)
    }

    fn paths_to_check(&self) -> Vec<String> {
        vec![paths::snapshot_file()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default()]
    }

    async fn fetch_zones(&self) -> Result<Vec<ZoneRecord>> {
        let path = paths::snapshot_file().ok_or_else(|| anyhow!("no cache directory"))?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading snapshot from {}", path.display()))?;
        let zones: Vec<ZoneRecord> = serde_json::from_str(&content)
            .with_context(|| format!("parsing snapshot at {}", path.display()))?;
        Ok(zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("MEETSLOT_CACHE_DIR", dir.path());

        let zones = vec![
            ZoneRecord::new("Europe/Madrid", 7200),
            ZoneRecord::new("Asia/Tokyo", 32400),
        ];
        save_snapshot(&zones).unwrap();

        let provider = SnapshotProvider::new();
        assert!(provider.is_available().await);
        let loaded = provider.fetch_zones().await.unwrap();
        assert_eq!(loaded, zones);

        std::env::remove_var("MEETSLOT_CACHE_DIR");
    }
}
