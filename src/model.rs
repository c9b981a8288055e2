use std::collections::BTreeMap;

use serde::Serialize;

use crate::section_classify::SectionType;
use crate::table_classify::TableType;

/// A table as lifted from the markdown export: the first row is the header.
/// Ids are sequential within one extraction run; a started table that yields
/// no rows is discarded but still consumes its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub id: usize,
    pub rows: Vec<Vec<String>>,
}

/// A raw table with its semantic type, in the output wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedTable {
    pub id: usize,
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub headers: Vec<String>,
    pub data: Vec<Vec<String>>,
    pub row_count: usize,
}

impl ClassifiedTable {
    #[must_use]
    pub fn from_raw(raw: RawTable, table_type: TableType) -> Self {
        let mut rows = raw.rows.into_iter();
        let headers = rows.next().unwrap_or_default();
        let data = rows.collect::<Vec<_>>();
        Self {
            id: raw.id,
            table_type,
            headers,
            row_count: data.len(),
            data,
        }
    }
}

/// One titled span of the document. `content` holds the narrative lines only;
/// tables and decoration inside the span are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub level: u8,
    pub title: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub has_tables: bool,
    pub content: Option<String>,
    pub has_content: bool,
}

/// Best-effort facts pulled from the plain text and the classified tables.
/// Every field degrades to absent/empty/zero when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyInformation {
    pub resort_name: Option<String>,
    pub validity_period: Option<String>,
    pub room_count: Option<usize>,
    pub meal_plans_available: Vec<String>,
    pub special_offers_count: usize,
    pub has_christmas_supplement: bool,
    pub has_transfer_included: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedData {
    pub key_information: KeyInformation,
    pub tables_by_type: BTreeMap<TableType, Vec<ClassifiedTable>>,
    pub narrative_text: String,
    pub document_sections: Vec<Section>,
    pub all_tables: Vec<ClassifiedTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_tables: usize,
    pub table_types: Vec<TableType>,
    pub sections_found: usize,
    pub has_rates: bool,
    pub has_offers: bool,
}

/// The successful output record. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub success: bool,
    pub file: String,
    pub timestamp: String,
    pub extracted_data: ExtractedData,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionFailure {
    pub success: bool,
    pub error: String,
}

/// Either shape serializes flat, without an outer tag, so callers see
/// `{"success": true, ...}` or `{"success": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    Success(Box<DocumentReport>),
    Failure(ExtractionFailure),
}

impl ExtractionResult {
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(ExtractionFailure {
            success: false,
            error: error.into(),
        })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn as_report(&self) -> Option<&DocumentReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Failure(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifiedTable, ExtractionResult, RawTable};
    use crate::table_classify::TableType;

    #[test]
    fn from_raw_splits_header_and_data() {
        let raw = RawTable {
            id: 3,
            rows: vec![
                vec!["SGL".to_string(), "DBL".to_string()],
                vec!["100".to_string(), "150".to_string()],
            ],
        };

        let classified = ClassifiedTable::from_raw(raw, TableType::RoomRates);
        assert_eq!(classified.id, 3);
        assert_eq!(classified.headers, vec!["SGL", "DBL"]);
        assert_eq!(classified.data, vec![vec!["100", "150"]]);
        assert_eq!(classified.row_count, 1);
    }

    #[test]
    fn header_only_table_keeps_zero_row_count() {
        let raw = RawTable {
            id: 1,
            rows: vec![vec!["SGL".to_string(), "DBL".to_string()]],
        };

        let classified = ClassifiedTable::from_raw(raw, TableType::RoomRates);
        assert!(classified.data.is_empty());
        assert_eq!(classified.row_count, 0);
    }

    #[test]
    fn failure_serializes_flat() {
        let result = ExtractionResult::failure("File not found: /tmp/x.pdf");
        let value = serde_json::to_value(&result).expect("failure should serialize");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "File not found: /tmp/x.pdf");
    }
}
