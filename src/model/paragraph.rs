//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// Typeface used when a run carries no font attribute.
pub const DEFAULT_FONT: &str = "Arial";

/// A paragraph of styled runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<Run>,

    /// Paragraph alignment
    pub alignment: Alignment,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            alignment: Alignment::Left,
        }
    }

    /// Create a paragraph from runs with the given alignment.
    pub fn from_runs(runs: Vec<Run>, alignment: Alignment) -> Self {
        Self { runs, alignment }
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(Run::new(text));
        p
    }

    /// The paragraph emitted for content with no paragraphs at all:
    /// one empty run, left aligned.
    pub fn blank() -> Self {
        Self::with_text("")
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(Run::is_empty)
    }

    /// Number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of text with one resolved style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: RunStyle,
}

impl Run {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Create a text run with a style.
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Resolved run style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Strikethrough text
    pub strike: bool,

    /// Underline, if any
    pub underline: Option<Underline>,

    /// Text color as hex digits without the leading `#`
    pub color: Option<String>,

    /// Font size in half-points; `None` leaves the encoder default
    pub size: Option<u32>,

    /// Font family
    pub font: String,
}

impl Default for RunStyle {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strike: false,
            underline: None,
            color: None,
            size: None,
            font: DEFAULT_FONT.to_string(),
        }
    }
}

impl RunStyle {
    /// Check if any character formatting is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.strike || self.underline.is_some()
    }
}

/// Underline kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Underline {
    /// Single line
    #[default]
    Single,
}

impl Underline {
    /// WordprocessingML `w:u` value.
    pub fn as_wordml(&self) -> &'static str {
        match self {
            Underline::Single => "single",
        }
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justified,
}

impl Alignment {
    /// Map an editor `align` attribute to an alignment.
    ///
    /// Unknown or missing values fall back to left.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("center") => Alignment::Center,
            Some("right") => Alignment::Right,
            Some("justify") => Alignment::Justified,
            _ => Alignment::Left,
        }
    }

    /// WordprocessingML `w:jc` value.
    pub fn as_wordml(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justified => "both",
        }
    }
}
