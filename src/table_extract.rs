use crate::line_classify::{is_candidate_table_line, is_separator_row};
use crate::model::RawTable;

/// Splits a pipe-delimited line into trimmed cells, dropping the leading and
/// trailing empty cells produced by lines that start or end with a pipe.
fn split_table_row(line: &str) -> Vec<String> {
    let mut cells = line.split('|').map(str::trim).collect::<Vec<_>>();
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InTable,
}

/// Scans markdown lines and groups contiguous pipe-delimited lines into raw
/// tables. Separator rows are skipped; a table that accumulates no rows is
/// dropped, though its id stays consumed.
#[must_use]
pub fn extract_tables(markdown: &str) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut current_rows: Vec<Vec<String>> = Vec::new();
    let mut state = ScanState::Outside;
    let mut table_id = 0_usize;

    let flush_current = |rows: &mut Vec<Vec<String>>, tables: &mut Vec<RawTable>, id: usize| {
        if !rows.is_empty() {
            tables.push(RawTable {
                id,
                rows: std::mem::take(rows),
            });
        }
    };

    for line in markdown.lines() {
        if is_candidate_table_line(line) {
            if state == ScanState::Outside {
                state = ScanState::InTable;
                current_rows.clear();
                table_id += 1;
            }

            if !is_separator_row(line) {
                let cells = split_table_row(line);
                if !cells.is_empty() {
                    current_rows.push(cells);
                }
            }
        } else if state == ScanState::InTable {
            flush_current(&mut current_rows, &mut tables, table_id);
            state = ScanState::Outside;
        }
    }

    flush_current(&mut current_rows, &mut tables, table_id);
    tables
}
