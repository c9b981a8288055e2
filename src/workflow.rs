use serde::Serialize;
use serde_json::Value;

use crate::error::ExtractError;
use crate::model::{ClassifiedTable, ExtractionResult, KeyInformation, Section, Summary};

#[derive(Serialize)]
struct FlatReport<'a> {
    success: bool,
    file: &'a str,
    key_info: &'a KeyInformation,
    tables: &'a [ClassifiedTable],
    text: &'a str,
    sections: &'a [Section],
    summary: &'a Summary,
}

/// Flattens a successful report for workflow-automation consumers that want
/// the interesting fields at the top level. Failures pass through unchanged.
pub fn flatten_report(result: &ExtractionResult) -> Result<Value, ExtractError> {
    let value = match result {
        ExtractionResult::Success(report) => serde_json::to_value(FlatReport {
            success: true,
            file: &report.file,
            key_info: &report.extracted_data.key_information,
            tables: &report.extracted_data.all_tables,
            text: &report.extracted_data.narrative_text,
            sections: &report.extracted_data.document_sections,
            summary: &report.summary,
        })?,
        ExtractionResult::Failure(failure) => serde_json::to_value(failure)?,
    };
    Ok(value)
}
