//! Word document exporter implementation.

use crate::error::Result;
use crate::model::Document;
use crate::render::{to_docx, DOCX_MIME_TYPE};

use super::{finish_result, DocumentExporter, ExportOptions, ExportResult};

/// Word (`.docx`) exporter.
#[derive(Debug, Clone, Default)]
pub struct DocxExporter {
    _private: (),
}

impl DocxExporter {
    /// Create a new docx exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExporter for DocxExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn export(&self, doc: &Document, options: &ExportOptions) -> Result<ExportResult> {
        let bytes = to_docx(doc, &options.render)?;
        let result = ExportResult::new(bytes, doc.metadata.clone()).with_mime_type(DOCX_MIME_TYPE);
        Ok(finish_result(doc, result, options))
    }
}
