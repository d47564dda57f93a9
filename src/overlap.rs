//! Overlap engine: the common working-hours window across participants
//!
//! Pure integer arithmetic over fixed UTC offsets. Each participant's
//! 08:00-18:00 local window is translated onto the absolute UTC timeline
//! without day normalization, intersected, and the intersection is then
//! projected back into every participant's own local clock.

use crate::index::ZoneIndex;
use crate::types::{MeetError, OverlapSlot, Participant, WORK_END_HOUR, WORK_START_HOUR};

/// Resolve the user's queries into participants.
///
/// Unresolvable "other" entries are dropped rather than failing the
/// whole request, matching the selection flow where a stale pick simply
/// disappears. Entries resolving to the base zone are dropped as
/// duplicates.
pub fn resolve_participants(
    index: &ZoneIndex,
    base_query: Option<&str>,
    other_queries: &[String],
) -> Result<(Participant, Vec<Participant>), MeetError> {
    if index.is_empty() {
        return Err(MeetError::DataNotReady);
    }

    let base_query = match base_query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(MeetError::NoBaseSelected),
    };

    let base = index
        .resolve(base_query)
        .ok_or_else(|| MeetError::UnresolvableZone(base_query.to_string()))?;

    let others: Vec<Participant> = other_queries
        .iter()
        .filter_map(|q| index.resolve(q))
        .filter(|p| p.zone_name != base.zone_name)
        .collect();

    Ok((base, others))
}

/// Resolve and compute in one step; the entry point for callers that
/// only want the final slots.
pub fn plan_meeting(
    index: &ZoneIndex,
    base_query: Option<&str>,
    other_queries: &[String],
) -> Result<Vec<OverlapSlot>, MeetError> {
    let (base, others) = resolve_participants(index, base_query, other_queries)?;
    compute_overlap(&base, &others)
}

/// Intersect every participant's working window and project the result
/// into each local clock. Base comes first in the output, then `others`
/// in the order supplied.
pub fn compute_overlap(
    base: &Participant,
    others: &[Participant],
) -> Result<Vec<OverlapSlot>, MeetError> {
    if others.is_empty() {
        return Err(MeetError::NoOtherParticipants);
    }

    let mut all: Vec<&Participant> = Vec::with_capacity(others.len() + 1);
    all.push(base);
    all.extend(others.iter());

    // UTC bounds stay unnormalized: offsets may push them negative or
    // past 86400, and the intersection is taken on that absolute
    // timeline.
    let (max_start, min_end) = all.iter().fold((i64::MIN, i64::MAX), |(start, end), p| {
        (
            start.max(WORK_START_HOUR * 3600 - p.offset_seconds),
            end.min(WORK_END_HOUR * 3600 - p.offset_seconds),
        )
    });

    if max_start >= min_end {
        return Err(MeetError::EmptyIntersection);
    }

    Ok(all
        .iter()
        .map(|p| OverlapSlot {
            location: p.display_name.clone(),
            start: format_local_hour(max_start, p.offset_seconds),
            end: format_local_hour(min_end, p.offset_seconds),
        })
        .collect())
}

/// Project a UTC bound into a local clock, floored to the hour. The +24
/// before the modulo keeps the remainder non-negative for bounds that
/// sit outside [0, 86400).
fn format_local_hour(utc_seconds: i64, offset_seconds: i64) -> String {
    let hour = ((utc_seconds + offset_seconds).div_euclid(3600) + 24) % 24;
    format!("{hour:02}:00")
}
