//! Zone data providers: where the raw zone snapshot comes from
//!
//! The index never fetches anything itself. Providers are tried in
//! order and the first one that yields a non-empty snapshot wins; a
//! fresh network fetch is mirrored to the snapshot cache so later runs
//! work offline.

mod bundled;
mod snapshot;
mod timezonedb;

pub use bundled::BundledProvider;
pub use snapshot::SnapshotProvider;
pub use timezonedb::TimeZoneDbProvider;

use crate::types::ZoneRecord;
use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;

/// Base trait for all zone data providers
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// The provider's unique name
    fn name(&self) -> &'static str;

    /// The provider's display name
    fn display_name(&self) -> &'static str;

    /// Whether the provider could serve a snapshot right now
    async fn is_available(&self) -> bool;

    /// Fetch the complete zone snapshot
    async fn fetch_zones(&self) -> Result<Vec<ZoneRecord>>;

    /// Paths and settings the doctor command should report
    fn paths_to_check(&self) -> Vec<String>;
}

/// All providers, in fallback order.
pub fn get_all_providers() -> Vec<Box<dyn ZoneProvider>> {
    vec![
        Box::new(TimeZoneDbProvider::new()),
        Box::new(SnapshotProvider::new()),
        Box::new(BundledProvider::new()),
    ]
}

/// Walk the provider chain and return the first non-empty snapshot,
/// together with the display name of the provider that produced it.
pub async fn load_zones(verbose: bool) -> Result<(Vec<ZoneRecord>, &'static str)> {
    for provider in get_all_providers() {
        if !provider.is_available().await {
            continue;
        }
        if verbose {
            eprintln!("  Trying {}...", provider.display_name().dimmed());
        }

        match provider.fetch_zones().await {
            Ok(zones) if !zones.is_empty() => {
                if provider.name() == "timezonedb" {
                    // Best effort: a stale cache beats no cache
                    let _ = snapshot::save_snapshot(&zones);
                }
                return Ok((zones, provider.display_name()));
            }
            Ok(_) => continue,
            Err(e) => {
                if verbose {
                    eprintln!(
                        "  {} {}: {}",
                        "✗".red(),
                        provider.display_name(),
                        e.to_string().dimmed()
                    );
                }
                continue;
            }
        }
    }

    anyhow::bail!("no zone data provider produced a snapshot")
}
