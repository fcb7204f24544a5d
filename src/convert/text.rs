//! Plain text exporter implementation.

use crate::error::Result;
use crate::model::Document;
use crate::render::to_text;

use super::{finish_result, DocumentExporter, ExportOptions, ExportResult};

/// Plain text exporter.
#[derive(Debug, Clone, Default)]
pub struct TextExporter {
    _private: (),
}

impl TextExporter {
    /// Create a new text exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExporter for TextExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn export(&self, doc: &Document, options: &ExportOptions) -> Result<ExportResult> {
        let content = to_text(doc, &options.render)?;
        let result = ExportResult::new(content.into_bytes(), doc.metadata.clone())
            .with_mime_type("text/plain");
        Ok(finish_result(doc, result, options))
    }
}
