//! Design-suggestion prompts and reply parsing.
//!
//! The editor's suggestion panel sends the current document text to a
//! server-side proxy, which holds the model credential and forwards the
//! request. This module only builds the request body and parses the reply;
//! it has no network access and no notion of an API key.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default number of suggestions requested.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Longest excerpt of the document included in a prompt, in characters.
const MAX_CONTENT_CHARS: usize = 4000;

/// What the user wants suggestions about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignBrief {
    /// Plain text of the document being edited
    pub content: String,

    /// Intended readers, e.g. "new customers"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// Desired tone, e.g. "friendly"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    /// Upper bound on the number of suggestions kept from the reply
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

impl DesignBrief {
    /// Create a brief for the given document text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            audience: None,
            tone: None,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Builder method to set the audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Builder method to set the tone.
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    /// Builder method to cap the number of suggestions.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max.max(1);
        self
    }

    /// Build the prompt text sent to the model.
    pub fn build_prompt(&self) -> String {
        let mut prompt = format!(
            "Suggest up to {} improvements to the layout and design of the following document.",
            self.max_suggestions
        );
        if let Some(ref audience) = self.audience {
            prompt.push_str(&format!(" The audience is {}.", audience.trim()));
        }
        if let Some(ref tone) = self.tone {
            prompt.push_str(&format!(" Keep the tone {}.", tone.trim()));
        }
        prompt.push_str(" Answer with a numbered list, one suggestion per line.\n\n");

        let content = self.content.trim();
        if content.chars().count() > MAX_CONTENT_CHARS {
            log::debug!("Truncating prompt content to {} chars", MAX_CONTENT_CHARS);
            prompt.extend(content.chars().take(MAX_CONTENT_CHARS));
        } else {
            prompt.push_str(content);
        }
        prompt
    }

    /// Build the request body for the suggestion proxy.
    pub fn to_request(&self) -> SuggestionRequest {
        SuggestionRequest::new(self.build_prompt())
    }

    /// Parse a model reply into at most `max_suggestions` items.
    pub fn parse_reply(&self, reply: &str) -> Vec<String> {
        parse_suggestions(reply, self.max_suggestions)
    }
}

/// Body posted to the suggestion proxy.
///
/// Authentication happens between the proxy and the model provider, so the
/// body carries no key or token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Prompt text
    pub prompt: String,

    /// Model name, left to the proxy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Reply length limit in tokens
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl SuggestionRequest {
    /// Create a request with default sampling settings.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            max_tokens: 512,
            temperature: 0.7,
        }
    }

    /// Builder method to pin a model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Extracts list items from free-form model output.
pub struct SuggestionParser {
    item_regex: Regex,
}

impl SuggestionParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self {
            // "1. x", "2) x", "- x", "* x", "• x"
            item_regex: Regex::new(r"^\s*(?:\d+[.)]|[-*•])\s+(.+?)\s*$").unwrap(),
        }
    }

    /// Return up to `max` list items in reply order.
    pub fn parse(&self, reply: &str, max: usize) -> Vec<String> {
        reply
            .lines()
            .filter_map(|line| self.item_regex.captures(line))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().replace("**", "").trim().to_string())
            .filter(|item| !item.is_empty())
            .take(max)
            .collect()
    }
}

impl Default for SuggestionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse numbered or bulleted lines from a model reply, keeping at most `max`.
pub fn parse_suggestions(reply: &str, max: usize) -> Vec<String> {
    SuggestionParser::new().parse(reply, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        let brief = DesignBrief::new("  Quarterly report\nRevenue grew.  ")
            .with_audience("investors")
            .with_tone("formal")
            .with_max_suggestions(3);

        let prompt = brief.build_prompt();
        assert!(prompt.starts_with("Suggest up to 3 improvements"));
        assert!(prompt.contains("The audience is investors."));
        assert!(prompt.contains("Keep the tone formal."));
        assert!(prompt.ends_with("Quarterly report\nRevenue grew."));
    }

    #[test]
    fn test_prompt_truncates_content() {
        let brief = DesignBrief::new("a".repeat(MAX_CONTENT_CHARS + 100));
        let prompt = brief.build_prompt();
        let tail = prompt.rsplit("\n\n").next().unwrap();
        assert_eq!(tail.len(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn test_request_has_no_credential() {
        let request = DesignBrief::new("text").to_request();
        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();

        assert!(object.contains_key("prompt"));
        for key in object.keys() {
            let key = key.to_lowercase();
            assert!(!key.contains("key") && !key.contains("token") || key == "max_tokens");
        }
    }

    #[test]
    fn test_parse_suggestions() {
        let reply = "Here are some ideas:\n\
                     1. Use a larger heading\n\
                     2) **Add whitespace** between sections\n\
                     - Align images left\n\
                     • Shorten paragraphs\n\
                     Thanks!";

        let items = parse_suggestions(reply, 10);
        assert_eq!(
            items,
            vec![
                "Use a larger heading",
                "Add whitespace between sections",
                "Align images left",
                "Shorten paragraphs",
            ]
        );
    }

    #[test]
    fn test_parse_caps_at_max() {
        let brief = DesignBrief::new("x").with_max_suggestions(2);
        let items = brief.parse_reply("1. a\n2. b\n3. c");
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_ignores_prose() {
        assert!(parse_suggestions("No list here.\nJust text.", 5).is_empty());
    }
}
