//! Export statistics.

use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Statistics collected while exporting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Number of paragraphs exported
    pub paragraph_count: u32,

    /// Number of paragraphs without visible text
    pub empty_paragraph_count: u32,

    /// Number of text runs
    pub run_count: u32,

    /// Number of runs carrying character formatting
    pub styled_run_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::new();
        for paragraph in doc.paragraphs() {
            stats.paragraph_count += 1;
            if paragraph.is_empty() {
                stats.empty_paragraph_count += 1;
            }
            for run in &paragraph.runs {
                stats.run_count += 1;
                if run.style.has_styling() {
                    stats.styled_run_count += 1;
                }
            }
            stats.count_text(&paragraph.plain_text());
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
