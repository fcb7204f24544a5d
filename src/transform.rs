//! Case-cycling text transform.
//!
//! Each press of the editor's case button applies the next mode in the
//! cycle `Upper -> Lower -> Title -> Upper`. The current mode is a plain
//! value owned by the caller; [`CaseMode::next`] is pure.

use serde::{Deserialize, Serialize};

/// A text case mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// UPPER CASE
    #[default]
    Upper,
    /// lower case
    Lower,
    /// Title Case
    Title,
}

impl CaseMode {
    /// All modes in cycle order.
    pub const ALL: [Self; 3] = [Self::Upper, Self::Lower, Self::Title];

    /// The mode after this one.
    pub const fn next(self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Title,
            Self::Title => Self::Upper,
        }
    }

    /// Transform text into this case.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Title => title_case(text),
        }
    }

    /// Parse a mode name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Some(Self::Upper),
            "lower" | "lowercase" => Some(Self::Lower),
            "title" | "capitalize" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest. Whitespace is preserved as-is.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Session-owned case cycle position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseCycler {
    mode: CaseMode,
}

impl CaseCycler {
    /// Start a cycle at `mode`.
    pub fn starting_at(mode: CaseMode) -> Self {
        Self { mode }
    }

    /// The mode the next call to [`CaseCycler::apply`] will use.
    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Apply the current mode and advance the cycle.
    pub fn apply(&mut self, text: &str) -> String {
        let out = self.mode.apply(text);
        self.mode = self.mode.next();
        out
    }

    /// Return to the start of the cycle.
    pub fn reset(&mut self) {
        self.mode = CaseMode::default();
    }
}
