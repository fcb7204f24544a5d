//! Integration tests for the exporter registry.

use std::sync::Arc;
use deltadoc::convert::{
    DocumentExporter, DocxExporter, ExportOptions, ExportResult, ExporterRegistry, OutputFormat,
};
use deltadoc::error::{Error, Result};
use deltadoc::model::{Document, Paragraph};
use deltadoc::render::{ExportStats, JsonFormat, DOCX_MIME_TYPE};

/// Mock exporter for testing.
struct MockExporter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockExporter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentExporter for MockExporter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn export(&self, doc: &Document, _options: &ExportOptions) -> Result<ExportResult> {
        Ok(ExportResult::new(
            format!("Exported {} paragraphs by {}", doc.paragraph_count(), self.name).into_bytes(),
            doc.metadata.clone(),
        ))
    }
}

fn sample() -> Document {
    Document::from_paragraphs(vec![
        Paragraph::with_text("First line"),
        Paragraph::new(),
        Paragraph::with_text("Third line"),
    ])
}

#[test]
fn test_export_options_builder() {
    let options = ExportOptions::new()
        .with_stats(true)
        .with_json_format(JsonFormat::Compact);

    assert!(options.collect_stats);
    assert_eq!(options.json_format, JsonFormat::Compact);
}

#[test]
fn test_exporter_registry_new() {
    let registry = ExporterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("docx"));
    assert!(!registry.supports("json"));
}

#[test]
fn test_exporter_registry_with_defaults() {
    let registry = ExporterRegistry::with_defaults();

    assert!(registry.supports("docx"));
    assert!(registry.supports("DOCX")); // Case insensitive
    assert!(registry.supports("json"));
    assert!(registry.supports("txt"));
    assert!(registry.supports("text"));
    assert!(!registry.supports("pdf"));
}

#[test]
fn test_exporter_registry_register() {
    let mut registry = ExporterRegistry::new();
    registry.register(Arc::new(MockExporter::new(vec!["md", "markdown"], "markdown")));

    assert!(registry.supports("md"));
    assert!(registry.supports("MARKDOWN"));
    assert!(registry.get_by_name("Markdown").is_some());
}

#[test]
fn test_registered_exporter_replaces_default() {
    let mut registry = ExporterRegistry::with_defaults();
    registry.register(Arc::new(MockExporter::new(vec!["txt"], "plain")));

    let result = registry.export(&sample(), "txt", &ExportOptions::default()).unwrap();
    assert_eq!(result.as_text(), Some("Exported 3 paragraphs by plain"));

    // Other extensions of the replaced exporter keep working
    let result = registry.export(&sample(), "text", &ExportOptions::default()).unwrap();
    assert_eq!(result.as_text(), Some("First line\n\nThird line"));
}

#[test]
fn test_export_format_dispatch() {
    let registry = ExporterRegistry::with_defaults();
    let options = ExportOptions::default();

    let docx = registry.export_format(&sample(), OutputFormat::Docx, &options).unwrap();
    assert_eq!(docx.mime_type, DOCX_MIME_TYPE);
    assert!(docx.content.starts_with(b"PK\x03\x04"));

    let json = registry.export_format(&sample(), OutputFormat::Json, &options).unwrap();
    assert_eq!(json.mime_type, "application/json");
    assert!(json.as_text().unwrap().trim_start().starts_with('{'));

    let text = registry.export_format(&sample(), OutputFormat::Text, &options).unwrap();
    assert_eq!(text.mime_type, "text/plain");
}

#[test]
fn test_export_unknown_extension() {
    let registry = ExporterRegistry::with_defaults();
    let result = registry.export(&sample(), "xyz", &ExportOptions::default());
    assert!(matches!(result, Err(Error::UnknownFormat(ext)) if ext == "xyz"));
}

#[test]
fn test_export_to_path_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let registry = ExporterRegistry::with_defaults();

    let result = registry.export_to_path(
        &sample(),
        &dir.path().join("noextension"),
        &ExportOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_export_to_path_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.docx");

    let result = ExporterRegistry::with_defaults()
        .export_to_path(&sample(), &path, &ExportOptions::default())
        .unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, result.content);
}

#[test]
fn test_export_result_with_stats() {
    let stats = ExportStats {
        paragraph_count: 5,
        word_count: 20,
        ..Default::default()
    };

    let result = ExportResult::new(Vec::new(), Default::default()).with_stats(stats);

    let stats = result.stats.unwrap();
    assert_eq!(stats.paragraph_count, 5);
    assert_eq!(stats.word_count, 20);
}

#[test]
fn test_export_collects_stats_on_request() {
    let registry = ExporterRegistry::with_defaults();

    let plain = registry.export(&sample(), "docx", &ExportOptions::default()).unwrap();
    assert!(plain.stats.is_none());

    let with_stats = registry
        .export(&sample(), "docx", &ExportOptions::new().with_stats(true))
        .unwrap();
    let stats = with_stats.stats.unwrap();
    assert_eq!(stats.paragraph_count, 3);
    assert_eq!(stats.empty_paragraph_count, 1);
    assert_eq!(stats.word_count, 4);
}

#[test]
fn test_output_format_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Docx);
    assert_eq!(OutputFormat::Text.extension(), "txt");
}

#[test]
fn test_docx_exporter_name() {
    let exporter = DocxExporter::new();
    assert_eq!(exporter.name(), "docx");
    assert!(exporter.supports_extension("Docx"));
}
