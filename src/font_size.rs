//! Font-size scale used by the editor's size control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A whitelisted editor font size, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontSize(u32);

impl FontSize {
    /// Sizes offered by the size picker, ascending.
    pub const SCALE: [u32; 8] = [10, 12, 14, 16, 18, 20, 24, 32];

    /// Size used when text has no size attribute.
    pub const DEFAULT: FontSize = FontSize(14);

    /// Create a size if it is on the scale.
    pub fn new(pixels: u32) -> Option<Self> {
        Self::SCALE.contains(&pixels).then_some(Self(pixels))
    }

    /// Parse an attribute value such as `"18px"`.
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.trim().strip_suffix("px").unwrap_or(s.trim());
        digits.parse().ok().and_then(Self::new)
    }

    /// Pixel value.
    pub fn pixels(&self) -> u32 {
        self.0
    }

    /// Word half-point value (pixels doubled, matching the exporter).
    pub fn half_points(&self) -> u32 {
        self.0 * 2
    }

    /// Attribute string for the editor, e.g. `"18px"`.
    pub fn to_attribute(&self) -> String {
        format!("{}px", self.0)
    }

    /// Next larger size; stays put at the top of the scale.
    pub fn step_up(&self) -> Self {
        Self::SCALE
            .iter()
            .find(|&&px| px > self.0)
            .map(|&px| Self(px))
            .unwrap_or(*self)
    }

    /// Next smaller size; stays put at the bottom of the scale.
    pub fn step_down(&self) -> Self {
        Self::SCALE
            .iter()
            .rev()
            .find(|&&px| px < self.0)
            .map(|&px| Self(px))
            .unwrap_or(*self)
    }

    /// All sizes on the scale.
    pub fn all() -> impl Iterator<Item = FontSize> {
        Self::SCALE.iter().map(|&px| Self(px))
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl TryFrom<String> for FontSize {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("font size {:?} is not on the scale", value))
    }
}

impl From<FontSize> for String {
    fn from(size: FontSize) -> Self {
        size.to_attribute()
    }
}
