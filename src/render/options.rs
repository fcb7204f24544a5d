//! Rendering options and configuration.

use super::PackageCompression;

/// Options for rendering an assembled document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size written into the section properties
    pub page_size: PageSize,

    /// Compression used for `.docx` package parts
    pub compression: PackageCompression,

    /// Keep empty paragraphs in plain text output
    pub keep_empty_lines: bool,

    /// Collect export statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the package compression.
    pub fn with_compression(mut self, compression: PackageCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Keep or drop empty paragraphs in plain text output.
    pub fn with_empty_lines(mut self, keep: bool) -> Self {
        self.keep_empty_lines = keep;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            compression: PackageCompression::Deflate,
            keep_empty_lines: true,
            collect_stats: false,
        }
    }
}

/// Page size for Word output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// US Letter, 8.5 x 11 in
    #[default]
    Letter,
    /// ISO A4, 210 x 297 mm
    A4,
}

impl PageSize {
    /// Width and height in twentieths of a point.
    pub fn twips(&self) -> (u32, u32) {
        match self {
            PageSize::Letter => (12240, 15840),
            PageSize::A4 => (11906, 16838),
        }
    }

    /// Parse a page size name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(format!("Unknown page size: {}", other)),
        }
    }
}
