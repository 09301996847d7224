//! Export file naming.

use chrono::{DateTime, Utc};

const FALLBACK_STEM: &str = "house_design";

/// `"Modern Balanced Single-Story Home"` → `"modern_balanced_single-story_home.json"`.
///
/// Runs of whitespace collapse to one `_`. Path separators are replaced too so
/// the file always lands directly in the export directory.
pub fn design_file_name(title: &str) -> String {
    let stem = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace(['/', '\\'], "_")
        .to_lowercase();
    if stem.is_empty() {
        format!("{FALLBACK_STEM}.json")
    } else {
        format!("{stem}.json")
    }
}

/// `design_history_{YYYY-MM-DD}.json`, dated by the item's creation (UTC).
pub fn history_file_name(created_at: DateTime<Utc>) -> String {
    format!("design_history_{}.json", created_at.format("%Y-%m-%d"))
}

/// The `n`th name for a file that already exists: `house.json` → `house_2.json`.
/// `n` of 1 or less leaves the name alone.
pub fn numbered_file_name(name: &str, n: u32) -> String {
    if n <= 1 {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}_{n}.{ext}"),
        None => format!("{name}_{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_design_file_name_lowercases_and_joins() {
        assert_eq!(
            design_file_name("Modern Balanced Single-Story Home"),
            "modern_balanced_single-story_home.json"
        );
    }

    #[test]
    fn test_design_file_name_collapses_whitespace_runs() {
        assert_eq!(
            design_file_name("  Arts   and\tCrafts \n Home "),
            "arts_and_crafts_home.json"
        );
    }

    #[test]
    fn test_design_file_name_strips_separators() {
        assert_eq!(design_file_name("A/B Home"), "a_b_home.json");
    }

    #[test]
    fn test_design_file_name_empty_title() {
        assert_eq!(design_file_name("   "), "house_design.json");
    }

    #[test]
    fn test_numbered_file_name() {
        assert_eq!(numbered_file_name("house.json", 1), "house.json");
        assert_eq!(numbered_file_name("house.json", 2), "house_2.json");
        assert_eq!(
            numbered_file_name("design_history_2024-03-09.json", 12),
            "design_history_2024-03-09_12.json"
        );
        assert_eq!(numbered_file_name("notes", 3), "notes_3");
    }

    #[test]
    fn test_history_file_name_uses_utc_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 0).unwrap();
        assert_eq!(history_file_name(at), "design_history_2024-03-09.json");
    }
}
