//! Document-level types.

use super::Paragraph;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An assembled document ready for encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Sections in the document. The assembler always produces one.
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            sections: Vec::new(),
        }
    }

    /// Create a single-section document from paragraphs.
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            metadata: Metadata::default(),
            sections: vec![Section::new(paragraphs)],
        }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Iterate over every paragraph in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.sections.iter().flat_map(|s| s.paragraphs.iter())
    }

    /// Total number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraph_count() == 0
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of paragraphs sharing page setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Paragraphs in order
    pub paragraphs: Vec<Paragraph>,
}

impl Section {
    /// Create a section from paragraphs.
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Application that produced the document
    pub generator: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Metadata stamped with this library as generator and the current time.
    pub fn generated_now() -> Self {
        Self {
            generator: Some(format!("deltadoc {}", env!("CARGO_PKG_VERSION"))),
            created: Some(Utc::now()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Run;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_document_plain_text() {
        let mut second = Paragraph::new();
        second.add_run(Run::new("Wor"));
        second.add_run(Run::new("ld"));
        let doc = Document::from_paragraphs(vec![Paragraph::with_text("Hello"), second]);

        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.plain_text(), "Hello\nWorld");
    }

    #[test]
    fn test_metadata_generated_now() {
        let metadata = Metadata::generated_now();
        assert!(metadata.created.is_some());
        assert!(metadata.generator.unwrap().starts_with("deltadoc "));
        assert!(metadata.title.is_none());
    }
}
