//! Delta parser: runs reader, segmenter, and assembler in one pass.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::{Document, Metadata, Operation};

use super::assemble::DocumentAssembler;
use super::normalize::RunNormalizer;
use super::options::ParseOptions;
use super::reader::{read_handle, DeltaReader, EditorHandle};
use super::segmenter::Segmenter;

/// Editor delta parser.
///
/// Holds the operations read at construction time; [`DeltaParser::parse`]
/// can be called any number of times and always yields the same document
/// content.
pub struct DeltaParser {
    ops: Vec<Operation>,
    options: ParseOptions,
}

impl DeltaParser {
    /// Open a delta JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a delta JSON file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a delta from a JSON string.
    pub fn from_str(json: &str) -> Result<Self> {
        Self::from_str_with_options(json, ParseOptions::default())
    }

    /// Parse a delta from a JSON string with custom options.
    pub fn from_str_with_options(json: &str, options: ParseOptions) -> Result<Self> {
        let ops = Self::reader(&options).read_str(json)?;
        Ok(Self { ops, options })
    }

    /// Parse a delta from JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a delta from JSON bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let ops = Self::reader(&options).read_slice(data)?;
        Ok(Self { ops, options })
    }

    /// Parse a delta from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a delta from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let ops = Self::reader(&options).read_reader(reader)?;
        Ok(Self { ops, options })
    }

    /// Take the contents of an editor handle.
    ///
    /// Fails with [`crate::Error::EditorUnavailable`] if the handle has no
    /// content model.
    pub fn from_handle<H: EditorHandle + ?Sized>(handle: &H) -> Result<Self> {
        Self::from_handle_with_options(handle, ParseOptions::default())
    }

    /// Take the contents of an editor handle with custom options.
    pub fn from_handle_with_options<H: EditorHandle + ?Sized>(
        handle: &H,
        options: ParseOptions,
    ) -> Result<Self> {
        let ops = read_handle(handle)?;
        Ok(Self { ops, options })
    }

    /// Build a parser from operations already in memory.
    pub fn from_operations(ops: Vec<Operation>, options: ParseOptions) -> Self {
        Self { ops, options }
    }

    fn reader(options: &ParseOptions) -> DeltaReader {
        DeltaReader::new().with_error_mode(options.error_mode)
    }

    /// The operations this parser holds.
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Segment and assemble the document.
    pub fn parse(&self) -> Result<Document> {
        let segmenter = Segmenter::new(
            RunNormalizer::new(self.options.default_font.clone()),
            self.options.embed_policy,
        );
        let paragraphs = segmenter.segment(&self.ops);

        let metadata = Metadata {
            title: self.options.title.clone(),
            author: self.options.author.clone(),
            ..Metadata::generated_now()
        };

        Ok(DocumentAssembler::new(metadata).assemble(paragraphs))
    }
}
