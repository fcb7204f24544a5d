//! Parsing options and configuration.

use crate::model::DEFAULT_FONT;

/// Options for reading and segmenting editor deltas.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// What to do with embedded objects
    pub embed_policy: EmbedPolicy,

    /// Typeface used for runs without a font attribute
    pub default_font: String,

    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip non-insert operations).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the embed policy.
    pub fn with_embed_policy(mut self, policy: EmbedPolicy) -> Self {
        self.embed_policy = policy;
        self
    }

    /// Keep a text placeholder where embeds appeared.
    pub fn with_embed_placeholders(mut self) -> Self {
        self.embed_policy = EmbedPolicy::Placeholder;
        self
    }

    /// Set the fallback typeface.
    pub fn with_default_font(mut self, font: impl Into<String>) -> Self {
        self.default_font = font.into();
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            embed_policy: EmbedPolicy::Drop,
            default_font: DEFAULT_FONT.to_string(),
            title: None,
            author: None,
        }
    }
}

/// Error handling mode while reading a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on retain/delete operations
    #[default]
    Strict,
    /// Skip retain/delete operations and continue
    Lenient,
}

/// How embedded objects (images, video, formulas) are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedPolicy {
    /// Flush pending text and drop the embed
    #[default]
    Drop,
    /// Flush pending text and emit a `[label]` paragraph in place of the embed
    Placeholder,
}
