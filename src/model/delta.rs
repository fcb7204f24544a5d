//! Editor delta operations and their attribute sets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Alignment;

/// Attribute keys recognized by the run normalizer and segmenter.
pub mod keys {
    /// Bold text (bool)
    pub const BOLD: &str = "bold";
    /// Italic text (bool)
    pub const ITALIC: &str = "italic";
    /// Underlined text (bool)
    pub const UNDERLINE: &str = "underline";
    /// Strikethrough text (bool)
    pub const STRIKE: &str = "strike";
    /// Text color, hex string such as `#ff0000`
    pub const COLOR: &str = "color";
    /// Font size with pixel suffix, such as `18px`
    pub const SIZE: &str = "size";
    /// Font family name
    pub const FONT: &str = "font";
    /// Line alignment, carried by the newline that ends the line
    pub const ALIGN: &str = "align";
}

/// A single insert operation read from the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// A run of text, possibly containing newlines.
    Text {
        /// Inserted text
        text: String,
        /// Formatting attributes
        attributes: AttributeSet,
    },

    /// A non-text object such as an image.
    Embed {
        /// The embedded object
        embed: Embed,
        /// Formatting attributes
        attributes: AttributeSet,
    },
}

impl Operation {
    /// Create an unstyled text operation.
    pub fn text(text: impl Into<String>) -> Self {
        Operation::Text {
            text: text.into(),
            attributes: AttributeSet::new(),
        }
    }

    /// Create a styled text operation.
    pub fn styled(text: impl Into<String>, attributes: AttributeSet) -> Self {
        Operation::Text {
            text: text.into(),
            attributes,
        }
    }

    /// Create an image embed operation.
    pub fn image(source: impl Into<String>) -> Self {
        Operation::Embed {
            embed: Embed::Image {
                source: source.into(),
            },
            attributes: AttributeSet::new(),
        }
    }

    /// Get the attributes of this operation.
    pub fn attributes(&self) -> &AttributeSet {
        match self {
            Operation::Text { attributes, .. } | Operation::Embed { attributes, .. } => attributes,
        }
    }

    /// Check if this is a text operation.
    pub fn is_text(&self) -> bool {
        matches!(self, Operation::Text { .. })
    }

    /// Check if this is an embed operation.
    pub fn is_embed(&self) -> bool {
        matches!(self, Operation::Embed { .. })
    }
}

/// An embedded (non-text) object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Embed {
    /// An image, usually a data URL or remote URL
    Image {
        /// Image source
        source: String,
    },
    /// A video frame
    Video {
        /// Video source
        source: String,
    },
    /// A formula
    Formula {
        /// Formula source (TeX)
        source: String,
    },
    /// Any other embed type
    Other {
        /// Embed type name
        name: String,
    },
}

impl Embed {
    /// Build an embed from the editor's insert object (e.g. `{"image": "..."}`).
    ///
    /// The first key decides the kind. An empty object yields `Other` with an
    /// empty name.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let Some((name, value)) = object.iter().next() else {
            return Embed::Other {
                name: String::new(),
            };
        };

        let source = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        match name.as_str() {
            "image" => Embed::Image { source },
            "video" => Embed::Video { source },
            "formula" => Embed::Formula { source },
            _ => Embed::Other { name: name.clone() },
        }
    }

    /// Short label for the embed kind.
    pub fn label(&self) -> &str {
        match self {
            Embed::Image { .. } => "image",
            Embed::Video { .. } => "video",
            Embed::Formula { .. } => "formula",
            Embed::Other { name } => name,
        }
    }
}

/// Formatting attributes attached to an operation.
///
/// Values are kept as raw JSON; typed accessors degrade to defaults when a
/// key is absent or holds the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(Map<String, Value>);

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a raw attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Read a boolean flag. Anything but JSON `true` is false.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    /// Read a non-empty string attribute.
    pub fn string(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Resolve the line alignment carried by these attributes.
    pub fn alignment(&self) -> Alignment {
        Alignment::from_attribute(self.string(keys::ALIGN))
    }
}

impl From<Map<String, Value>> for AttributeSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
