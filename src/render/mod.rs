//! Rendering module for encoding documents to output formats.

mod docx;
mod json;
mod options;
mod package;
mod result;
mod text;

pub use docx::{to_core_xml, to_document_xml, to_docx, DOCX_MIME_TYPE};
pub use json::{to_json, JsonFormat};
pub use options::{PageSize, RenderOptions};
pub use package::{PackageCompression, PackageWriter};
pub use result::ExportStats;
pub use text::to_text;
