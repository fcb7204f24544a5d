//! # deltadoc
//!
//! Rich-text editor delta to Word document conversion for Rust.
//!
//! This library reads the operation sequence produced by a Quill-style
//! editor, regroups it into paragraphs of styled runs, and encodes the
//! result as a `.docx` package, JSON, or plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use deltadoc::{parse_file, render};
//!
//! fn main() -> deltadoc::Result<()> {
//!     // Parse a saved delta
//!     let doc = parse_file("delta.json")?;
//!
//!     // Encode as a Word document
//!     let options = render::RenderOptions::default();
//!     let bytes = render::to_docx(&doc, &options)?;
//!     std::fs::write("document.docx", bytes)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph segmentation**: newline-delimited paragraphs with alignment
//! - **Run styling**: bold, italic, underline, strike, color, size, font
//! - **Output formats**: `.docx`, JSON, plain text
//! - **Editor helpers**: case cycling, font-size scale, navigation breadcrumbs,
//!   design-suggestion prompts

pub mod convert;
pub mod detect;
pub mod error;
pub mod font_size;
pub mod model;
pub mod nav;
pub mod parser;
pub mod render;
pub mod suggest;
pub mod transform;

// Re-export commonly used types
pub use convert::{
    DocumentExporter, ExportOptions, ExportResult, ExporterRegistry, OutputFormat,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_delta, DeltaFormat};
pub use error::{Error, Result};
pub use font_size::FontSize;
pub use model::{
    AttributeSet, Alignment, Document, Embed, Metadata, Operation, Paragraph, Run, RunStyle,
    Section, Underline,
};
pub use nav::{Crumb, IconId, Menu, MenuItem};
pub use parser::{DeltaParser, EditorHandle, EmbedPolicy, ErrorMode, ParseOptions};
pub use render::{ExportStats, JsonFormat, PageSize, RenderOptions};
pub use suggest::{parse_suggestions, DesignBrief, SuggestionRequest};
pub use transform::{CaseCycler, CaseMode};

use std::path::Path;

/// Parse a delta file and return an assembled document.
///
/// # Arguments
///
/// * `path` - Path to a JSON delta (`{"ops": [...]}` or a bare array)
///
/// # Example
///
/// ```no_run
/// use deltadoc::parse_file;
///
/// let doc = parse_file("delta.json").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DeltaParser::open(path)?;
    parser.parse()
}

/// Parse a delta file with custom options.
///
/// # Example
///
/// ```no_run
/// use deltadoc::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new()
///     .lenient()
///     .with_default_font("Georgia");
/// let doc = parse_file_with_options("delta.json", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DeltaParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a delta from its JSON text.
///
/// # Example
///
/// ```
/// use deltadoc::parse_str;
///
/// let doc = parse_str(r#"{"ops":[{"insert":"Hello\n"}]}"#).unwrap();
/// assert_eq!(doc.plain_text(), "Hello");
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    let parser = DeltaParser::from_str(json)?;
    parser.parse()
}

/// Parse a delta from JSON text with custom options.
pub fn parse_str_with_options(json: &str, options: ParseOptions) -> Result<Document> {
    let parser = DeltaParser::from_str_with_options(json, options)?;
    parser.parse()
}

/// Parse the current contents of an editor.
///
/// Fails with [`Error::EditorUnavailable`] when the editor has no content to
/// give.
pub fn parse_handle<H: EditorHandle + ?Sized>(handle: &H) -> Result<Document> {
    let parser = DeltaParser::from_handle(handle)?;
    parser.parse()
}

/// Extract plain text from a delta file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert a delta file to `.docx` bytes.
///
/// # Example
///
/// ```no_run
/// use deltadoc::to_docx;
///
/// let bytes = to_docx("delta.json").unwrap();
/// std::fs::write("document.docx", bytes).unwrap();
/// ```
pub fn to_docx<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let doc = parse_file(path)?;
    render::to_docx(&doc, &RenderOptions::default())
}

/// Convert a delta file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Convert a delta file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc, options)
}

/// Encode a delta given as JSON text in the requested format.
///
/// # Example
///
/// ```
/// use deltadoc::{export_str, OutputFormat};
///
/// let bytes = export_str(r#"[{"insert":"Hi\n"}]"#, OutputFormat::Text).unwrap();
/// assert_eq!(bytes, b"Hi");
/// ```
pub fn export_str(json: &str, format: OutputFormat) -> Result<Vec<u8>> {
    let doc = parse_str(json)?;
    let registry = ExporterRegistry::with_defaults();
    let result = registry.export_format(&doc, format, &ExportOptions::default())?;
    Ok(result.content)
}

/// Convert a delta file and write the result, choosing the output format
/// from the output path's extension.
///
/// # Example
///
/// ```no_run
/// use deltadoc::export_file;
///
/// let result = export_file("delta.json", "document.docx").unwrap();
/// println!("Wrote {} bytes", result.content_len());
/// ```
pub fn export_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ExportResult> {
    let doc = parse_file(input)?;
    let options = ExportOptions::default();
    ExporterRegistry::with_defaults().export_to_path(&doc, output.as_ref(), &options)
}

/// Asynchronous variant of [`export_file`].
///
/// Parsing and encoding run on the calling task; only the file write is
/// handed to tokio, and it is awaited before returning.
#[cfg(feature = "async")]
pub async fn export_file_async<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ExportResult> {
    let output = output.as_ref();
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::Other("File has no extension".into()))?;

    let data = tokio::fs::read(input).await?;
    let doc = DeltaParser::from_bytes(&data)?.parse()?;
    let result = ExporterRegistry::with_defaults().export(&doc, ext, &ExportOptions::default())?;

    tokio::fs::write(output, &result.content).await?;
    log::debug!("Saved {} bytes to {}", result.content_len(), output.display());
    Ok(result)
}

/// Builder for parsing and exporting editor deltas.
///
/// # Example
///
/// ```no_run
/// use deltadoc::{DeltaDoc, PageSize};
///
/// let bytes = DeltaDoc::new()
///     .with_font("Georgia")
///     .with_title("Release notes")
///     .with_page_size(PageSize::A4)
///     .lenient()
///     .parse("delta.json")?
///     .to_docx()?;
/// # Ok::<(), deltadoc::Error>(())
/// ```
pub struct DeltaDoc {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl DeltaDoc {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Skip unsupported operations instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the fallback font.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_default_font(font);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_title(title);
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_author(author);
        self
    }

    /// Keep embeds as placeholder paragraphs.
    pub fn with_embed_placeholders(mut self) -> Self {
        self.parse_options = self.parse_options.with_embed_placeholders();
        self
    }

    /// Set the page size of `.docx` output.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.render_options = self.render_options.with_page_size(page_size);
        self
    }

    /// Drop empty paragraphs from text output.
    pub fn without_empty_lines(mut self) -> Self {
        self.render_options = self.render_options.with_empty_lines(false);
        self
    }

    /// Parse a delta file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DeltaDocResult> {
        let parser = DeltaParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DeltaDocResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a delta from JSON text.
    pub fn parse_str(self, json: &str) -> Result<DeltaDocResult> {
        let parser = DeltaParser::from_str_with_options(json, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DeltaDocResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse the current contents of an editor.
    pub fn parse_handle<H: EditorHandle + ?Sized>(self, handle: &H) -> Result<DeltaDocResult> {
        let parser = DeltaParser::from_handle_with_options(handle, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DeltaDocResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for DeltaDoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a delta.
pub struct DeltaDocResult {
    /// The assembled document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl DeltaDocResult {
    /// Encode as `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Write the document, choosing the format from the path's extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<ExportResult> {
        let options = ExportOptions::new().with_render_options(self.render_options.clone());
        ExporterRegistry::with_defaults().export_to_path(&self.document, path.as_ref(), &options)
    }

    /// Get plain text.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
