//! JSON exporter implementation.

use crate::error::Result;
use crate::model::Document;
use crate::render::to_json;

use super::{finish_result, DocumentExporter, ExportOptions, ExportResult};

/// JSON exporter; writes the assembled document model.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    _private: (),
}

impl JsonExporter {
    /// Create a new JSON exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExporter for JsonExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn export(&self, doc: &Document, options: &ExportOptions) -> Result<ExportResult> {
        let content = to_json(doc, options.json_format)?;
        let result = ExportResult::new(content.into_bytes(), doc.metadata.clone())
            .with_mime_type("application/json");
        Ok(finish_result(doc, result, options))
    }
}
