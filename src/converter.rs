use std::fs;
use std::path::Path;

use crate::error::ExtractError;

/// The two exports the external conversion engine produces for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub text: String,
    pub markdown: String,
}

impl ConvertedDocument {
    /// A conversion with neither export carries nothing the pipeline can use.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.markdown.is_empty()
    }
}

/// Boundary to the external PDF-to-text/markdown engine. The pipeline only
/// ever sees the two export strings; how they are produced is the
/// implementor's business.
pub trait DocumentConverter {
    fn convert(&self, path: &Path) -> Result<ConvertedDocument, ExtractError>;
}

/// Loads pre-converted sidecar exports: for `document.pdf` it reads
/// `document.txt` and `document.md` from the same directory. Stands in for
/// the real engine in the CLI and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportPairConverter;

impl DocumentConverter for ExportPairConverter {
    fn convert(&self, path: &Path) -> Result<ConvertedDocument, ExtractError> {
        let text = fs::read_to_string(path.with_extension("txt"))?;
        let markdown = fs::read_to_string(path.with_extension("md"))?;
        Ok(ConvertedDocument { text, markdown })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{ConvertedDocument, DocumentConverter, ExportPairConverter};

    #[test]
    fn loads_sidecar_exports_next_to_the_document() {
        let dir = tempdir().expect("tempdir should be created");
        let pdf = dir.path().join("sheet.pdf");
        fs::write(dir.path().join("sheet.txt"), "plain text").expect("write txt");
        fs::write(dir.path().join("sheet.md"), "# md").expect("write md");

        let document = ExportPairConverter
            .convert(&pdf)
            .expect("conversion should succeed");
        assert_eq!(document.text, "plain text");
        assert_eq!(document.markdown, "# md");
    }

    #[test]
    fn missing_export_is_an_io_error() {
        let dir = tempdir().expect("tempdir should be created");
        let pdf = dir.path().join("missing.pdf");

        let result = ExportPairConverter.convert(&pdf);
        assert!(result.is_err());
    }

    #[test]
    fn empty_document_detection() {
        assert!(ConvertedDocument::default().is_empty());
        assert!(
            !ConvertedDocument {
                text: "x".to_string(),
                markdown: String::new(),
            }
            .is_empty()
        );
    }
}
