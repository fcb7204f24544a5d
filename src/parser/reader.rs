//! Delta reader: turns the editor's JSON content into operations.

use std::io::Read;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{AttributeSet, Embed, Operation};

use super::options::ErrorMode;

/// Source of editor content.
///
/// Returns `None` when the editor is not mounted or has no content model,
/// in which case export aborts before segmentation.
pub trait EditorHandle {
    /// The editor's current insert operations, in document order.
    fn contents(&self) -> Option<Vec<Operation>>;
}

impl EditorHandle for Vec<Operation> {
    fn contents(&self) -> Option<Vec<Operation>> {
        Some(self.clone())
    }
}

impl EditorHandle for [Operation] {
    fn contents(&self) -> Option<Vec<Operation>> {
        Some(self.to_vec())
    }
}

impl<T: EditorHandle> EditorHandle for Option<T> {
    fn contents(&self) -> Option<Vec<Operation>> {
        self.as_ref().and_then(|handle| handle.contents())
    }
}

/// Read operations from an editor handle.
pub fn read_handle<H: EditorHandle + ?Sized>(handle: &H) -> Result<Vec<Operation>> {
    handle.contents().ok_or(Error::EditorUnavailable)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireDelta {
    Wrapped { ops: Vec<WireOp> },
    Bare(Vec<WireOp>),
}

impl WireDelta {
    fn into_ops(self) -> Vec<WireOp> {
        match self {
            WireDelta::Wrapped { ops } | WireDelta::Bare(ops) => ops,
        }
    }
}

#[derive(Deserialize)]
struct WireOp {
    #[serde(default)]
    insert: Option<WireInsert>,
    #[serde(default)]
    retain: Option<Value>,
    #[serde(default)]
    delete: Option<Value>,
    #[serde(default)]
    attributes: Option<AttributeSet>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireInsert {
    Text(String),
    Embed(Map<String, Value>),
}

/// Reads the editor's delta JSON, wrapped (`{"ops": [...]}`) or bare (`[...]`).
#[derive(Debug, Clone, Default)]
pub struct DeltaReader {
    error_mode: ErrorMode,
}

impl DeltaReader {
    /// Create a strict reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Read a delta from a JSON string.
    pub fn read_str(&self, json: &str) -> Result<Vec<Operation>> {
        let wire: WireDelta = serde_json::from_str(json)?;
        self.convert(wire)
    }

    /// Read a delta from JSON bytes.
    pub fn read_slice(&self, data: &[u8]) -> Result<Vec<Operation>> {
        let wire: WireDelta = serde_json::from_slice(data)?;
        self.convert(wire)
    }

    /// Read a delta from a reader.
    pub fn read_reader<R: Read>(&self, reader: R) -> Result<Vec<Operation>> {
        let wire: WireDelta = serde_json::from_reader(reader)?;
        self.convert(wire)
    }

    /// Read a delta from an already-parsed JSON value.
    pub fn read_value(&self, value: Value) -> Result<Vec<Operation>> {
        let wire: WireDelta = serde_json::from_value(value)?;
        self.convert(wire)
    }

    fn convert(&self, wire: WireDelta) -> Result<Vec<Operation>> {
        let wire_ops = wire.into_ops();
        let mut ops = Vec::with_capacity(wire_ops.len());

        for (index, op) in wire_ops.into_iter().enumerate() {
            let attributes = op.attributes.unwrap_or_default();
            match op.insert {
                Some(WireInsert::Text(text)) => ops.push(Operation::Text { text, attributes }),
                Some(WireInsert::Embed(object)) => ops.push(Operation::Embed {
                    embed: Embed::from_object(&object),
                    attributes,
                }),
                None => {
                    let kind = if op.retain.is_some() {
                        "retain"
                    } else if op.delete.is_some() {
                        "delete"
                    } else {
                        "empty"
                    };
                    match self.error_mode {
                        ErrorMode::Strict => {
                            return Err(Error::UnsupportedOperation(format!(
                                "{} at index {}",
                                kind, index
                            )));
                        }
                        ErrorMode::Lenient => {
                            log::warn!("Skipping {} operation at index {}", kind, index);
                        }
                    }
                }
            }
        }

        log::debug!("Read {} delta operations", ops.len());
        Ok(ops)
    }
}
