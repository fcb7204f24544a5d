//! Plain text rendering for assembled documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text, one line per paragraph.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let lines: Vec<String> = doc
        .paragraphs()
        .filter(|p| options.keep_empty_lines || !p.is_empty())
        .map(|p| p.plain_text())
        .collect();

    Ok(lines.join("\n"))
}
