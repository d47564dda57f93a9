//! Cross-platform path utilities for the zone snapshot cache

use std::path::PathBuf;

/// User cache directory
pub fn cache_dir() -> Option<PathBuf> {
    dirs::cache_dir()
}

/// Location of the cached zone snapshot. `MEETSLOT_CACHE_DIR` overrides
/// the platform cache directory (used by tests and sandboxed installs).
pub fn snapshot_file() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("MEETSLOT_CACHE_DIR") {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join("zones.json"));
        }
    }
    cache_dir().map(|d| d.join("meetslot").join("zones.json"))
}
