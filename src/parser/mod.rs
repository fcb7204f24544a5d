//! Delta parsing module: reader, run normalizer, segmenter, and assembler.

mod assemble;
mod delta_parser;
mod normalize;
mod options;
mod reader;
mod segmenter;

pub use assemble::DocumentAssembler;
pub use delta_parser::DeltaParser;
pub use normalize::RunNormalizer;
pub use options::{EmbedPolicy, ErrorMode, ParseOptions};
pub use reader::{read_handle, DeltaReader, EditorHandle};
pub use segmenter::Segmenter;
