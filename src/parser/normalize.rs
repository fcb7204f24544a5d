//! Run normalizer: resolves an operation's attributes into a concrete style.

use regex::Regex;
use serde_json::Value;

use crate::model::{keys, AttributeSet, Run, RunStyle, Underline};

/// Resolves editor attributes against defaults.
///
/// Never fails: malformed values degrade to "unset".
#[derive(Debug, Clone)]
pub struct RunNormalizer {
    default_font: String,
    size_regex: Regex,
}

impl RunNormalizer {
    /// Create a normalizer with the given fallback typeface.
    pub fn new(default_font: impl Into<String>) -> Self {
        Self {
            default_font: default_font.into(),
            // Leading integer, the way the editor's size strings are read ("18px", "12.5px")
            size_regex: Regex::new(r"^\s*([+-]?\d+)").unwrap(),
        }
    }

    /// Build a run from a text segment and its operation's attributes.
    pub fn run(&self, text: &str, attributes: &AttributeSet) -> Run {
        Run::styled(text, self.style(attributes))
    }

    /// Resolve a style record.
    pub fn style(&self, attributes: &AttributeSet) -> RunStyle {
        RunStyle {
            bold: attributes.flag(keys::BOLD),
            italic: attributes.flag(keys::ITALIC),
            strike: attributes.flag(keys::STRIKE),
            underline: attributes
                .flag(keys::UNDERLINE)
                .then_some(Underline::Single),
            color: attributes
                .string(keys::COLOR)
                .map(|c| c.strip_prefix('#').unwrap_or(c))
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            size: attributes.get(keys::SIZE).and_then(|v| self.half_points(v)),
            font: attributes
                .string(keys::FONT)
                .unwrap_or(&self.default_font)
                .to_string(),
        }
    }

    /// Convert a pixel size attribute to half-points (pixels doubled).
    ///
    /// Returns `None` for anything that does not start with a positive integer.
    pub fn half_points(&self, value: &Value) -> Option<u32> {
        let pixels = match value {
            Value::String(s) => self
                .size_regex
                .captures(s)
                .and_then(|caps| caps[1].parse::<i64>().ok()),
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            _ => None,
        };

        let half_points = pixels
            .filter(|px| *px > 0)
            .and_then(|px| u32::try_from(px).ok())
            .and_then(|px| px.checked_mul(2));

        if half_points.is_none() {
            log::warn!("Ignoring unusable size attribute {}", value);
        }
        half_points
    }
}

impl Default for RunNormalizer {
    fn default() -> Self {
        Self::new(crate::model::DEFAULT_FONT)
    }
}
