pub(crate) fn pipe_count(line: &str) -> usize {
    line.matches('|').count()
}

/// A line with at least one pipe is treated as potential tabular content.
pub(crate) fn is_candidate_table_line(line: &str) -> bool {
    line.contains('|')
}

/// Stricter check used when scanning prose: a single stray pipe in a sentence
/// does not open a table region, two or more delimiters do.
pub(crate) fn is_table_delimited(line: &str) -> bool {
    pipe_count(line) >= 2
}

/// Markdown header/data separator rows: only whitespace, pipes, colons, hyphens.
pub(crate) fn is_separator_row(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|ch| ch.is_whitespace() || matches!(ch, '|' | ':' | '-'))
}

/// Decoration lines between sections: only whitespace, hyphens, colons.
pub(crate) fn is_decoration(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|ch| ch.is_whitespace() || matches!(ch, '-' | ':'))
}

/// Rows of digits and punctuation left behind when a table loses its
/// delimiters in the plain-text export.
pub(crate) fn is_numeric_debris(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|ch| ch.is_whitespace() || ch.is_ascii_digit() || matches!(ch, '.' | '-' | ','))
}

/// Parses `#`-style headings: 1 to 6 marker characters, whitespace, then a
/// non-empty title. Returns (level, trimmed title).
pub(crate) fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let marker_len = line.chars().take_while(|&ch| ch == '#').count();
    if !(1..=6).contains(&marker_len) {
        return None;
    }

    let rest = &line[marker_len..];
    if !rest.starts_with(|ch: char| ch.is_whitespace()) {
        return None;
    }

    let title = rest.trim();
    if title.is_empty() {
        return None;
    }

    let level = u8::try_from(marker_len).ok()?;
    Some((level, title))
}

/// What a single observed line means for the table region scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineDisposition {
    EntersTable,
    LeavesTable,
    InsideTable,
    OutsideTable,
}

/// Explicit Outside/InTable scanner threaded through one forward pass over
/// prose lines. A delimited line enters the region; a blank line or a line
/// without any pipe leaves it. The leaving line itself is still part of the
/// table's wake and is not prose.
#[derive(Debug, Default)]
pub(crate) struct TableRegionScanner {
    in_table: bool,
}

impl TableRegionScanner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn observe(&mut self, line: &str) -> LineDisposition {
        if is_table_delimited(line) {
            self.in_table = true;
            LineDisposition::EntersTable
        } else if self.in_table && (line.trim().is_empty() || !line.contains('|')) {
            self.in_table = false;
            LineDisposition::LeavesTable
        } else if self.in_table {
            LineDisposition::InsideTable
        } else {
            LineDisposition::OutsideTable
        }
    }

    pub(crate) fn reset(&mut self) {
        self.in_table = false;
    }
}
