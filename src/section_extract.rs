use crate::line_classify::{LineDisposition, TableRegionScanner, is_decoration, parse_heading};
use crate::model::Section;
use crate::section_classify::classify_section;

struct OpenSection {
    level: u8,
    title: String,
    has_tables: bool,
    lines: Vec<String>,
}

impl OpenSection {
    fn finalize(self) -> Section {
        let joined = self.lines.join("\n");
        let trimmed = joined.trim();
        let content = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };

        Section {
            level: self.level,
            section_type: classify_section(&self.title),
            title: self.title,
            has_tables: self.has_tables,
            has_content: content.is_some(),
            content,
        }
    }
}

/// Splits markdown on heading markers into titled sections, in document
/// order. Each section's content keeps only narrative lines: table regions
/// and separator decoration inside the span are excluded.
#[must_use]
pub fn extract_sections(markdown: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<OpenSection> = None;
    let mut scanner = TableRegionScanner::new();

    for line in markdown.lines() {
        if let Some((level, title)) = parse_heading(line) {
            if let Some(open) = current.take() {
                sections.push(open.finalize());
            }
            current = Some(OpenSection {
                level,
                title: title.to_string(),
                has_tables: false,
                lines: Vec::new(),
            });
            scanner.reset();
            continue;
        }

        match scanner.observe(line) {
            LineDisposition::EntersTable => {
                if let Some(open) = current.as_mut() {
                    open.has_tables = true;
                }
            }
            LineDisposition::OutsideTable => {
                if let Some(open) = current.as_mut()
                    && !line.trim().is_empty()
                    && !is_decoration(line)
                {
                    open.lines.push(line.to_string());
                }
            }
            LineDisposition::LeavesTable | LineDisposition::InsideTable => {}
        }
    }

    if let Some(open) = current.take() {
        sections.push(open.finalize());
    }

    sections
}
