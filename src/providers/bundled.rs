//! Bundled provider
//! Compiled-in zone table so the tool works with no network and no API
//! key. Offsets are fixed integers captured from the upstream list and
//! drift as DST transitions occur, same as any other snapshot.

use super::ZoneProvider;
use crate::types::ZoneRecord;
use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;

const BUILTIN: &[(&str, i64)] = &[
    ("Africa/Cairo", 10800),
    ("Africa/Johannesburg", 7200),
    ("Africa/Lagos", 3600),
    ("Africa/Nairobi", 10800),
    ("America/Argentina/Buenos_Aires", -10800),
    ("America/Bogota", -18000),
    ("America/Chicago", -18000),
    ("America/Denver", -21600),
    ("America/Lima", -18000),
    ("America/Los_Angeles", -25200),
    ("America/Mexico_City", -21600),
    ("America/New_York", -14400),
    ("America/Santiago", -14400),
    ("America/Sao_Paulo", -10800),
    ("America/Toronto", -14400),
    ("America/Vancouver", -25200),
    ("Asia/Bangkok", 25200),
    ("Asia/Dubai", 14400),
    ("Asia/Hong_Kong", 28800),
    ("Asia/Jakarta", 25200),
    ("Asia/Kolkata", 19800),
    ("Asia/Seoul", 32400),
    ("Asia/Shanghai", 28800),
    ("Asia/Singapore", 28800),
    ("Asia/Tokyo", 32400),
    ("Australia/Melbourne", 36000),
    ("Australia/Perth", 28800),
    ("Australia/Sydney", 36000),
    ("Europe/Amsterdam", 7200),
    ("Europe/Berlin", 7200),
    ("Europe/Dublin", 3600),
    ("Europe/Lisbon", 3600),
    ("Europe/London", 3600),
    ("Europe/Madrid", 7200),
    ("Europe/Paris", 7200),
    ("Europe/Rome", 7200),
    ("Europe/Stockholm", 7200),
    ("Europe/Warsaw", 7200),
    ("Pacific/Auckland", 43200),
    ("UTC", 0),
];

static BUNDLED_ZONES: Lazy<Vec<ZoneRecord>> = Lazy::new(|| {
    BUILTIN
        .iter()
        .map(|&(zone_name, gmt_offset)| ZoneRecord::new(zone_name, gmt_offset))
        .collect()
});

pub struct BundledProvider;

impl BundledProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ZoneProvider for BundledProvider {
    fn name(&self) -> &'static str {
        "bundled"
    }

    fn display_name(&self) -> &'static str {
        "Bundled zone table"
    }

    async fn is_available(&self) -> bool {
        true
    }

    fn paths_to_check(&self) -> Vec<String> {
        vec!["built into the binary".to_string()]
    }

    async fn fetch_zones(&self) -> Result<Vec<ZoneRecord>> {
        Ok(BUNDLED_ZONES.clone())
    }
}
