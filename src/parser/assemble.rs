//! Document assembler: wraps paragraphs into the encoder's document shape.

use crate::model::{Document, Metadata, Paragraph, Section};

/// Wraps a paragraph sequence in a single-section document.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    metadata: Metadata,
}

impl DocumentAssembler {
    /// Create an assembler attaching the given metadata.
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }

    /// Build the document.
    pub fn assemble(self, paragraphs: Vec<Paragraph>) -> Document {
        Document {
            metadata: self.metadata,
            sections: vec![Section::new(paragraphs)],
        }
    }
}
