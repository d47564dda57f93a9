//! Zone index: offset lookup and region grouping over a fetched snapshot
//!
//! Built once per data refresh from the provider's complete record list
//! and read-only afterwards. Lookup runs against the flat list in
//! provider order; the region map exists purely for presentation.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::types::{Participant, ZoneRecord};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Immutable snapshot of the provider's zone list, indexed three ways:
/// the flat record list in provider order (lookup position), a
/// name -> offset map (offset lookup, later record wins), and a
/// region -> sorted zone-name map (picker).
#[derive(Debug, Clone, Default)]
pub struct ZoneIndex {
    records: Vec<ZoneRecord>,
    offsets: HashMap<String, i64>,
    regions: BTreeMap<String, Vec<String>>,
}

impl ZoneIndex {
    /// Group records by the leading region segment and sort each group's
    /// zone names ascending, keeping the raw record list for lookup.
    /// Zone names carry no uniqueness guarantee; for the offset map the
    /// later record wins.
    pub fn build(records: Vec<ZoneRecord>) -> Self {
        let mut offsets: HashMap<String, i64> = HashMap::new();
        let mut regions: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for record in &records {
            offsets.insert(record.zone_name.clone(), record.gmt_offset);
            let region = record
                .zone_name
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string();
            regions.entry(region).or_default().push(record.zone_name.clone());
        }
        for zones in regions.values_mut() {
            zones.sort();
        }

        Self {
            records,
            offsets,
            regions,
        }
    }

    /// Case-insensitive substring lookup against the raw record list.
    ///
    /// The first record containing the query wins. Record order is
    /// provider order, never sorted order: a short query like "madrid"
    /// resolves to whichever matching zone the provider listed first.
    /// A miss is a normal outcome, not a fault.
    pub fn resolve(&self, query: &str) -> Option<Participant> {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return None;
        }

        self.records
            .iter()
            .find(|r| r.zone_name.to_lowercase().contains(&needle))
            .map(|r| Participant {
                display_name: display_name(query),
                zone_name: r.zone_name.clone(),
                offset_seconds: self
                    .offsets
                    .get(&r.zone_name)
                    .copied()
                    .unwrap_or(r.gmt_offset),
            })
    }

    /// Region names with their sorted zone lists, in region order.
    pub fn regions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Zone names under one region, if it exists.
    pub fn zones_in(&self, region: &str) -> Option<&[String]> {
        self.regions.get(region).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lowercase and map whitespace runs to underscores so spaced city names
/// ("New York") line up with zone identifiers ("America/New_York").
fn normalize_query(query: &str) -> String {
    WHITESPACE.replace_all(query.trim(), "_").to_lowercase()
}

/// Display label for a query: its second path segment when the user
/// picked a full zone name, the query itself otherwise. Underscores are
/// spaced for readability.
fn display_name(query: &str) -> String {
    let query = query.trim();
    query
        .split('/')
        .nth(1)
        .unwrap_or(query)
        .replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ZoneRecord> {
        vec![
            ZoneRecord::new("Europe/Madrid", 7200),
            ZoneRecord::new("Europe/London", 3600),
            ZoneRecord::new("America/New_York", -14400),
            ZoneRecord::new("America/Argentina/Buenos_Aires", -10800),
            ZoneRecord::new("Asia/Tokyo", 32400),
            ZoneRecord::new("Australia/Sydney", 36000),
        ]
    }

    #[test]
    fn test_build_groups_by_region_sorted() {
        let index = ZoneIndex::build(sample_records());

        let regions: Vec<&str> = index.regions().map(|(name, _)| name).collect();
        assert_eq!(regions, vec!["America", "Asia", "Australia", "Europe"]);

        let america = index.zones_in("America").unwrap();
        assert_eq!(
            america,
            ["America/Argentina/Buenos_Aires", "America/New_York"]
        );
        let europe = index.zones_in("Europe").unwrap();
        assert_eq!(europe, ["Europe/London", "Europe/Madrid"]);
    }

    #[test]
    fn test_every_zone_in_exactly_one_group() {
        let records = sample_records();
        let index = ZoneIndex::build(records.clone());

        let mut grouped: Vec<String> = index
            .regions()
            .flat_map(|(_, zones)| zones.iter().cloned())
            .collect();
        grouped.sort();

        let mut raw: Vec<String> = records.into_iter().map(|r| r.zone_name).collect();
        raw.sort();

        assert_eq!(grouped, raw);
    }

    #[test]
    fn test_resolve_case_insensitive_substring() {
        let index = ZoneIndex::build(sample_records());

        let p = index.resolve("MADRID").unwrap();
        assert_eq!(p.zone_name, "Europe/Madrid");
        assert_eq!(p.offset_seconds, 7200);

        let p = index.resolve("tokyo").unwrap();
        assert_eq!(p.zone_name, "Asia/Tokyo");
    }

    #[test]
    fn test_resolve_first_hit_wins_in_record_order() {
        // A synthetic duplicate listed before the real zone must win,
        // even though it sorts after it alphabetically.
        let records = vec![
            ZoneRecord::new("Indian/Paris_Reef", 14400),
            ZoneRecord::new("Europe/Paris", 7200),
        ];
        let index = ZoneIndex::build(records);

        let p = index.resolve("paris").unwrap();
        assert_eq!(p.zone_name, "Indian/Paris_Reef");
        assert_eq!(p.offset_seconds, 14400);
    }

    #[test]
    fn test_duplicate_names_resolve_at_first_position_with_latest_offset() {
        // Position comes from the record sequence (first hit), the
        // offset from the name map (later record wins).
        let records = vec![
            ZoneRecord::new("Europe/Madrid", 3600),
            ZoneRecord::new("Europe/Lisbon", 3600),
            ZoneRecord::new("Europe/Madrid", 7200),
        ];
        let index = ZoneIndex::build(records);

        let p = index.resolve("madrid").unwrap();
        assert_eq!(p.zone_name, "Europe/Madrid");
        assert_eq!(p.offset_seconds, 7200);
    }

    #[test]
    fn test_resolve_whitespace_maps_to_underscore() {
        let index = ZoneIndex::build(sample_records());

        let p = index.resolve("New York").unwrap();
        assert_eq!(p.zone_name, "America/New_York");

        let p = index.resolve("buenos aires").unwrap();
        assert_eq!(p.zone_name, "America/Argentina/Buenos_Aires");
    }

    #[test]
    fn test_resolve_miss_is_none() {
        let index = ZoneIndex::build(sample_records());
        assert!(index.resolve("atlantis").is_none());
        assert!(index.resolve("").is_none());
        assert!(index.resolve("   ").is_none());
    }

    #[test]
    fn test_display_name_from_query() {
        let index = ZoneIndex::build(sample_records());

        let p = index.resolve("Europe/Madrid").unwrap();
        assert_eq!(p.display_name, "Madrid");

        let p = index.resolve("America/New_York").unwrap();
        assert_eq!(p.display_name, "New York");

        // Free-form queries keep the user's spelling
        let p = index.resolve("Sydney").unwrap();
        assert_eq!(p.display_name, "Sydney");
    }

    #[test]
    fn test_empty_index() {
        let index = ZoneIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.resolve("madrid").is_none());
        assert_eq!(index.regions().count(), 0);
    }
}
