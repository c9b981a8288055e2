use regex::Regex;

use crate::line_classify::{LineDisposition, TableRegionScanner, is_numeric_debris};

/// Drops table regions and leftover numeric rows from the plain-text export,
/// keeping only narrative prose. Consecutive blank lines collapse to one.
#[must_use]
pub fn strip_table_lines(text: &str) -> String {
    let mut scanner = TableRegionScanner::new();
    let mut kept: Vec<&str> = Vec::new();

    for line in text.lines() {
        if scanner.observe(line) == LineDisposition::OutsideTable && !is_numeric_debris(line) {
            kept.push(line);
        }
    }

    let blank_runs = Regex::new(r"\n{2,}").expect("hardcoded blank-run regex is valid");
    blank_runs
        .replace_all(&kept.join("\n"), "\n\n")
        .trim()
        .to_string()
}

/// Reformats exported prose for readability: literal `\n` escapes become real
/// line breaks, bullets get their own line, spaces hugging a break are
/// stripped, and runs of three or more breaks collapse to a paragraph break.
/// Applying the pass to already-formatted text is a no-op.
#[must_use]
pub fn format_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let unescaped = text.replace("\\n", "\n");

    // Bullet isolation runs before space stripping so the inserted break is
    // never left with a trailing space, keeping the pass idempotent.
    let bullet = Regex::new(r"([^-\n])[ \t]*(- )").expect("hardcoded bullet regex is valid");
    let bulleted = bullet.replace_all(&unescaped, "${1}\n${2}");

    let break_padding = Regex::new(r" *\n *").expect("hardcoded break-padding regex is valid");
    let stripped = break_padding.replace_all(&bulleted, "\n");

    let break_runs = Regex::new(r"\n{3,}").expect("hardcoded break-run regex is valid");
    break_runs.replace_all(&stripped, "\n\n").trim().to_string()
}
