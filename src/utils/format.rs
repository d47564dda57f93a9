//! Output formatting utilities

use crate::types::{OverlapSlot, Participant};
use chrono::{FixedOffset, Utc};
use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Render a fixed offset as "UTC+HH:MM" / "UTC-HH:MM".
pub fn format_offset(offset_seconds: i64) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Current wall-clock time in a fixed-offset zone, "HH:MM".
pub fn local_now(offset_seconds: i64) -> String {
    FixedOffset::east_opt(offset_seconds as i32)
        .map(|tz| Utc::now().with_timezone(&tz).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Table row for the overlap result
#[derive(Tabled)]
pub struct OverlapRow {
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Zone")]
    pub zone: String,
    #[tabled(rename = "Offset")]
    pub offset: String,
    #[tabled(rename = "Local Now")]
    pub local_now: String,
    #[tabled(rename = "Shared Window")]
    pub window: String,
}

/// Format the overlap result as a table. `participants` and `slots` are
/// parallel, base first.
pub fn format_overlap_table(participants: &[Participant], slots: &[OverlapSlot]) -> String {
    let rows: Vec<OverlapRow> = participants
        .iter()
        .zip(slots)
        .map(|(p, s)| OverlapRow {
            location: s.location.clone(),
            zone: p.zone_name.clone(),
            offset: format_offset(p.offset_seconds),
            local_now: local_now(p.offset_seconds),
            window: format!("{} → {}", s.start, s.end),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::left()))
        .to_string()
}

/// Format the overlap result as JSON
pub fn format_json(slots: &[OverlapSlot]) -> String {
    serde_json::to_string_pretty(slots).unwrap_or_else(|_| "[]".to_string())
}

/// Format the overlap result as CSV
pub fn format_csv(slots: &[OverlapSlot]) -> String {
    let mut output = String::from("Location,Start,End\n");
    for slot in slots {
        output.push_str(&format!("{},{},{}\n", slot.location, slot.start, slot.end));
    }
    output
}

/// Print banner
pub fn print_banner() {
    println!();
    println!(
        "{}",
        "  meetslot - Working-Hours Overlap Finder".cyan().bold()
    );
    println!();
}

/// Print doctor results
pub fn print_doctor_results(checks: &[(String, String, bool)]) {
    println!("{}", "\nZone Data Providers:\n".bold());

    for (name, path, found) in checks {
        let icon = if *found { "✓".green() } else { "✗".red() };
        let path_display = if *found { path.green() } else { path.dimmed() };
        println!("  {} {}", icon, name);
        println!("    {}\n", path_display);
    }
}
