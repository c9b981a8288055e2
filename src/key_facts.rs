use regex::Regex;

use crate::model::{ClassifiedTable, KeyInformation};
use crate::table_classify::TableType;

/// Meal-plan vocabulary; detected plans are reported in this order.
pub const MEAL_PLAN_VOCABULARY: &[&str] = &[
    "Half Board",
    "Full Board",
    "All Inclusive",
    "Bed & Breakfast",
    "Room Only",
];

const RESORT_NAME_WINDOW_CHARS: usize = 500;
const VALIDITY_WINDOW_CHARS: usize = 1000;

/// Resort-name and validity-period heuristics, tuned to hospitality rate
/// sheets. Kept as a replaceable policy object so a different document family
/// can swap in its own pattern set without touching the pipeline.
#[derive(Debug, Clone)]
pub struct KeyFactPatterns {
    resort_name: Vec<Regex>,
    name_blocklist: Vec<&'static str>,
    validity_period: Vec<Regex>,
}

impl Default for KeyFactPatterns {
    fn default() -> Self {
        let compile = |pattern: &str| {
            Regex::new(pattern).expect("hardcoded key-fact regex is valid")
        };

        Self {
            resort_name: vec![
                compile(r"BANYAN TREE ([A-Z]+)"),
                compile(r"([A-Z\s]{3,}(?:RESORT|HOTEL|ISLAND|VILLAS?))"),
                compile(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?:Resort|Hotel|Island)"),
            ],
            name_blocklist: vec!["Pool Villa", "Room Category", "RATES PERIOD"],
            validity_period: vec![
                compile(
                    r"(?i)PERIOD[:\s]+.*?(\d{1,2}[\s\-/]+(?:JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\w*[\s\-/]+\d{2,4})",
                ),
                compile(
                    r"(?i)(\d{1,2}[.\-/]\d{1,2}[.\-/]\d{2,4})\s*[-–]\s*(\d{1,2}[.\-/]\d{1,2}[.\-/]\d{2,4})",
                ),
            ],
        }
    }
}

/// Character-counted prefix, so multi-byte text never splits mid-character.
fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

impl KeyFactPatterns {
    /// Runs the full battery of scans. Every field is best-effort: a fact
    /// that no pattern finds stays absent/empty/zero.
    #[must_use]
    pub fn extract(&self, text: &str, tables: &[ClassifiedTable]) -> KeyInformation {
        let text_lower = text.to_lowercase();

        let meal_plans_available = MEAL_PLAN_VOCABULARY
            .iter()
            .filter(|plan| text_lower.contains(&plan.to_lowercase()))
            .map(ToString::to_string)
            .collect();

        KeyInformation {
            resort_name: self.find_resort_name(text),
            validity_period: self.find_validity_period(text),
            room_count: count_rooms(tables),
            meal_plans_available,
            special_offers_count: text_lower.matches("special offer").count()
                + text_lower.matches("promotion").count(),
            has_christmas_supplement: text_lower.contains("christmas")
                && text_lower.contains("supplement"),
            has_transfer_included: text_lower.contains("transfer")
                && text_lower.contains("included"),
        }
    }

    /// Tries each name pattern against the document head. A match containing
    /// a blocklisted phrase is rejected but the remaining patterns still run.
    fn find_resort_name(&self, text: &str) -> Option<String> {
        let head = char_prefix(text, RESORT_NAME_WINDOW_CHARS);

        for pattern in &self.resort_name {
            let Some(captures) = pattern.captures(head) else {
                continue;
            };
            let name = captures
                .get(1)
                .map_or("", |group| group.as_str())
                .trim();
            if !name.is_empty()
                && !self.name_blocklist.iter().any(|skip| name.contains(skip))
            {
                return Some(name.to_string());
            }
        }

        None
    }

    fn find_validity_period(&self, text: &str) -> Option<String> {
        let head = char_prefix(text, VALIDITY_WINDOW_CHARS);

        self.validity_period
            .iter()
            .find_map(|pattern| pattern.find(head))
            .map(|matched| matched.as_str().to_string())
    }
}

/// Total rooms across all room-category tables, counting data rows.
fn count_rooms(tables: &[ClassifiedTable]) -> Option<usize> {
    let room_tables = tables
        .iter()
        .filter(|table| table.table_type == TableType::RoomCategories)
        .collect::<Vec<_>>();

    if room_tables.is_empty() {
        return None;
    }

    Some(room_tables.iter().map(|table| table.data.len()).sum())
}
