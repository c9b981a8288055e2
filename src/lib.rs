mod converter;
mod error;
mod key_facts;
mod line_classify;
mod model;
mod narrative;
mod section_classify;
mod section_extract;
mod table_classify;
mod table_extract;
mod workflow;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::Utc;

pub use converter::{ConvertedDocument, DocumentConverter, ExportPairConverter};
pub use error::ExtractError;
pub use key_facts::{KeyFactPatterns, MEAL_PLAN_VOCABULARY};
pub use model::{
    ClassifiedTable, DocumentReport, ExtractedData, ExtractionFailure, ExtractionResult,
    KeyInformation, RawTable, Section, Summary,
};
pub use narrative::{format_text, strip_table_lines};
pub use section_classify::{SectionType, classify_section};
pub use section_extract::extract_sections;
pub use table_classify::{TableType, classify_table};
pub use table_extract::extract_tables;
pub use workflow::flatten_report;

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Apply readability formatting to the narrative text and each
    /// section's content.
    pub format_text: bool,
    /// Key-fact heuristics; swap in a different pattern set for a different
    /// document family.
    pub patterns: KeyFactPatterns,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            format_text: true,
            patterns: KeyFactPatterns::default(),
        }
    }
}

fn group_tables_by_type(
    tables: &[ClassifiedTable],
) -> BTreeMap<TableType, Vec<ClassifiedTable>> {
    let mut grouped: BTreeMap<TableType, Vec<ClassifiedTable>> = BTreeMap::new();
    for table in tables {
        grouped
            .entry(table.table_type)
            .or_default()
            .push(table.clone());
    }
    grouped
}

fn build_summary(tables: &[ClassifiedTable], sections: &[Section]) -> Summary {
    let table_types = tables
        .iter()
        .map(|table| table.table_type)
        .collect::<BTreeSet<_>>();

    Summary {
        total_tables: tables.len(),
        table_types: table_types.into_iter().collect(),
        sections_found: sections.len(),
        has_rates: tables
            .iter()
            .any(|table| table.table_type == TableType::RoomRates),
        has_offers: sections
            .iter()
            .any(|section| section.title.to_lowercase().contains("offer")),
    }
}

/// The pure core: turns the two conversion-engine exports into the full
/// report. Tables come from the markdown, narrative text from the plain-text
/// export, key facts from the unformatted text plus the classified tables.
#[must_use]
pub fn analyze_document(
    file_name: &str,
    text: &str,
    markdown: &str,
    options: &AnalyzeOptions,
) -> DocumentReport {
    let tables = extract_tables(markdown)
        .into_iter()
        .map(|raw| {
            let table_type = classify_table(&raw);
            ClassifiedTable::from_raw(raw, table_type)
        })
        .collect::<Vec<_>>();

    let mut sections = extract_sections(markdown);
    let mut narrative_text = strip_table_lines(text);

    if options.format_text {
        narrative_text = format_text(&narrative_text);
        for section in &mut sections {
            if let Some(content) = &mut section.content {
                *content = format_text(content);
            }
        }
    }

    let key_information = options.patterns.extract(text, &tables);
    let summary = build_summary(&tables, &sections);

    tracing::debug!(
        "document analysis completed: tables={}, sections={}",
        tables.len(),
        sections.len()
    );

    DocumentReport {
        success: true,
        file: file_name.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        extracted_data: ExtractedData {
            key_information,
            tables_by_type: group_tables_by_type(&tables),
            narrative_text,
            document_sections: sections,
            all_tables: tables,
        },
        summary,
    }
}

/// Runs the conversion boundary and the analysis, normalizing every failure
/// into the `{success: false, error}` record. Nothing panics or propagates
/// past this function.
pub fn extract_document<C: DocumentConverter>(
    converter: &C,
    path: &Path,
    options: &AnalyzeOptions,
) -> ExtractionResult {
    if !path.exists() {
        return ExtractionResult::failure(
            ExtractError::FileNotFound(path.display().to_string()).to_string(),
        );
    }

    let document = match converter.convert(path) {
        Ok(document) => document,
        Err(error) => return ExtractionResult::failure(error.to_string()),
    };

    if document.is_empty() {
        return ExtractionResult::failure(ExtractError::EmptyConversion.to_string());
    }

    let file_name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    ExtractionResult::Success(Box::new(analyze_document(
        &file_name,
        &document.text,
        &document.markdown,
        options,
    )))
}

#[cfg(test)]
mod tests {
    use super::{AnalyzeOptions, analyze_document, build_summary, group_tables_by_type};
    use crate::model::{ClassifiedTable, RawTable};
    use crate::table_classify::TableType;

    fn classified(id: usize, table_type: TableType) -> ClassifiedTable {
        ClassifiedTable::from_raw(
            RawTable {
                id,
                rows: vec![vec!["h".to_string()], vec!["d".to_string()]],
            },
            table_type,
        )
    }

    #[test]
    fn grouping_preserves_document_order_within_a_type() {
        let tables = vec![
            classified(1, TableType::RoomRates),
            classified(2, TableType::General),
            classified(3, TableType::RoomRates),
        ];

        let grouped = group_tables_by_type(&tables);
        let rates = &grouped[&TableType::RoomRates];
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].id, 1);
        assert_eq!(rates[1].id, 3);
    }

    #[test]
    fn summary_reports_distinct_types_once() {
        let tables = vec![
            classified(1, TableType::RoomRates),
            classified(2, TableType::RoomRates),
        ];

        let summary = build_summary(&tables, &[]);
        assert_eq!(summary.total_tables, 2);
        assert_eq!(summary.table_types, vec![TableType::RoomRates]);
        assert!(summary.has_rates);
    }

    #[test]
    fn formatting_can_be_disabled() {
        let options = AnalyzeOptions {
            format_text: false,
            ..AnalyzeOptions::default()
        };
        let report = analyze_document("f.pdf", "a\\nb", "# S\nc\\nd\n", &options);

        assert_eq!(report.extracted_data.narrative_text, "a\\nb");
        let section = &report.extracted_data.document_sections[0];
        assert_eq!(section.content.as_deref(), Some("c\\nd"));
    }

    #[test]
    fn formatting_applies_to_sections_and_narrative() {
        let report = analyze_document(
            "f.pdf",
            "a\\nb",
            "# S\nc\\nd\n",
            &AnalyzeOptions::default(),
        );

        assert_eq!(report.extracted_data.narrative_text, "a\nb");
        let section = &report.extracted_data.document_sections[0];
        assert_eq!(section.content.as_deref(), Some("c\nd"));
    }
}
