//! Document model types for rich-text content representation.
//!
//! This module defines both sides of the conversion: the editor's delta
//! operations going in, and the paragraph/run document coming out. The
//! document side is encoder-agnostic and is shared by every renderer.

mod delta;
mod document;
mod paragraph;

pub use delta::{keys, AttributeSet, Embed, Operation};
pub use document::{Document, Metadata, Section};
pub use paragraph::{Alignment, Paragraph, Run, RunStyle, Underline, DEFAULT_FONT};
