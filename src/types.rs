//! Core types for meetslot

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Start of the working day, in local wall-clock hours.
pub const WORK_START_HOUR: i64 = 8;
/// End of the working day (exclusive), in local wall-clock hours.
pub const WORK_END_HOUR: i64 = 18;

/// A single zone entry as supplied by a zone data provider.
///
/// Field names follow the upstream list-time-zone payload, so the same
/// struct deserializes the API response and the on-disk snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Canonical zone name, e.g. "Europe/Madrid"
    #[serde(rename = "zoneName")]
    pub zone_name: String,
    /// Fixed UTC offset in seconds, positive east of UTC
    #[serde(rename = "gmtOffset")]
    pub gmt_offset: i64,
}

impl ZoneRecord {
    pub fn new(zone_name: &str, gmt_offset: i64) -> Self {
        Self {
            zone_name: zone_name.to_string(),
            gmt_offset,
        }
    }
}

/// A meeting participant: a user-chosen location resolved against the
/// zone index. Created per calculation request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Display label derived from the query (city segment, underscores spaced)
    pub display_name: String,
    /// Canonical zone name of the matched record
    pub zone_name: String,
    /// Fixed UTC offset in seconds
    pub offset_seconds: i64,
}

/// One participant's share of the common working window, rendered in
/// that participant's own local clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapSlot {
    pub location: String,
    /// Local start, zero-padded "HH:00"
    pub start: String,
    /// Local end, zero-padded "HH:00"
    pub end: String,
}

/// Recoverable, user-facing conditions. Nothing here is fatal; the
/// presentation layer renders the message and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeetError {
    #[error("no base location selected")]
    NoBaseSelected,

    #[error("no zone matches '{0}'")]
    UnresolvableZone(String),

    #[error("no other locations to compare against the base")]
    NoOtherParticipants,

    #[error("no overlap in working hours (08:00-18:00)")]
    EmptyIntersection,

    #[error("zone data has not been loaded yet")]
    DataNotReady,
}

/// CLI output format
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
