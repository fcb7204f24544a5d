//! Document exporter module providing a plugin architecture for output formats.
//!
//! Exporters encode an assembled [`Document`] into bytes. The registry maps
//! output file extensions to exporters so callers can pick an encoder from a
//! target path.
//!
//! # Example
//!
//! ```no_run
//! use deltadoc::convert::{ExportOptions, ExporterRegistry};
//! use deltadoc::DeltaParser;
//! use std::path::Path;
//!
//! fn main() -> deltadoc::Result<()> {
//!     let doc = DeltaParser::open("delta.json")?.parse()?;
//!     let registry = ExporterRegistry::with_defaults();
//!     registry.export_to_path(&doc, Path::new("out.docx"), &ExportOptions::default())?;
//!     Ok(())
//! }
//! ```

mod docx;
mod json;
mod text;

pub use docx::DocxExporter;
pub use json::JsonExporter;
pub use text::TextExporter;

use crate::error::{Error, Result};
use crate::model::{Document, Metadata};
use crate::render::{ExportStats, JsonFormat, RenderOptions};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options for document export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Whether to collect statistics during export
    pub collect_stats: bool,

    /// Layout of JSON output
    pub json_format: JsonFormat,
}

impl ExportOptions {
    /// Create new export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Output format for export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Word document
    #[default]
    Docx,

    /// JSON structure
    Json,

    /// Plain text
    Text,
}

impl OutputFormat {
    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

/// Result of document export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Encoded content
    pub content: Vec<u8>,

    /// Source document metadata
    pub metadata: Metadata,

    /// Export statistics (if collected)
    pub stats: Option<ExportStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ExportResult {
    /// Create a new export result.
    pub fn new(content: Vec<u8>, metadata: Metadata) -> Self {
        Self {
            content,
            metadata,
            stats: None,
            mime_type: "application/octet-stream",
        }
    }

    /// Set export statistics.
    pub fn with_stats(mut self, stats: ExportStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Content as UTF-8 text, for textual formats.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Trait for document exporters.
///
/// Implement this trait to add support for a new output format.
pub trait DocumentExporter: Send + Sync {
    /// Get the supported file extensions for this exporter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// Encode a document.
    fn export(&self, doc: &Document, options: &ExportOptions) -> Result<ExportResult>;

    /// Check if this exporter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Attach statistics when the options ask for them.
fn finish_result(doc: &Document, result: ExportResult, options: &ExportOptions) -> ExportResult {
    if options.collect_stats || options.render.collect_stats {
        result.with_stats(ExportStats::collect(doc))
    } else {
        result
    }
}

/// Registry for document exporters.
///
/// The registry maps file extensions to exporters and provides
/// convenient methods for exporting documents.
pub struct ExporterRegistry {
    exporters: HashMap<String, Arc<dyn DocumentExporter>>,
    by_name: HashMap<String, Arc<dyn DocumentExporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with default exporters (docx, JSON, text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxExporter::new()));
        registry.register(Arc::new(JsonExporter::new()));
        registry.register(Arc::new(TextExporter::new()));
        registry
    }

    /// Register an exporter.
    ///
    /// The exporter will be registered for all its supported extensions.
    pub fn register(&mut self, exporter: Arc<dyn DocumentExporter>) {
        for ext in exporter.supported_extensions() {
            self.exporters.insert(ext.to_lowercase(), exporter.clone());
        }
        self.by_name.insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.exporters.get(&ext.to_lowercase()).cloned()
    }

    /// Get an exporter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.exporters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.exporters.keys().map(|s| s.as_str()).collect()
    }

    /// Export using the exporter registered for an extension.
    pub fn export(
        &self,
        doc: &Document,
        ext: &str,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let exporter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnknownFormat(ext.to_string()))?;

        log::debug!("Exporting with {} exporter", exporter.name());
        exporter.export(doc, options)
    }

    /// Export in the given output format.
    pub fn export_format(
        &self,
        doc: &Document,
        format: OutputFormat,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        self.export(doc, format.extension(), options)
    }

    /// Export to a file, choosing the exporter from the path's extension.
    pub fn export_to_path(
        &self,
        doc: &Document,
        path: &Path,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other("File has no extension".into()))?;

        let result = self.export(doc, ext, options)?;
        std::fs::write(path, &result.content)?;
        Ok(result)
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
