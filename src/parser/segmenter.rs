//! Paragraph segmenter: regroups delta operations into paragraphs.
//!
//! Text operations are split on `\n`. Every newline closes the current
//! paragraph, taking its alignment from the attributes of the operation that
//! carried the newline. Text after the last newline of an operation carries
//! over into the next one. Embeds close any pending text.

use crate::model::{Alignment, AttributeSet, Embed, Operation, Paragraph, Run};

use super::normalize::RunNormalizer;
use super::options::EmbedPolicy;

/// Walks an operation sequence once and produces paragraphs.
#[derive(Debug, Clone)]
pub struct Segmenter {
    normalizer: RunNormalizer,
    embed_policy: EmbedPolicy,
}

impl Segmenter {
    /// Create a segmenter.
    pub fn new(normalizer: RunNormalizer, embed_policy: EmbedPolicy) -> Self {
        Self {
            normalizer,
            embed_policy,
        }
    }

    /// Segment operations into paragraphs.
    ///
    /// Never returns an empty vector: content without any paragraph yields a
    /// single paragraph holding one empty run.
    pub fn segment(&self, ops: &[Operation]) -> Vec<Paragraph> {
        let mut paragraphs = self.split(ops);
        if paragraphs.is_empty() {
            log::debug!("No paragraphs produced, emitting blank paragraph");
            let run = self.normalizer.run("", &AttributeSet::new());
            paragraphs.push(Paragraph::from_runs(vec![run], Alignment::Left));
        }
        paragraphs
    }

    /// Segment operations without the blank-paragraph fallback.
    pub fn split(&self, ops: &[Operation]) -> Vec<Paragraph> {
        let mut state = SegmentState::default();

        for op in ops {
            match op {
                Operation::Text { text, attributes } => {
                    let mut segments = text.split('\n').peekable();
                    while let Some(segment) = segments.next() {
                        if !segment.is_empty() {
                            state.push(self.normalizer.run(segment, attributes));
                        }
                        if segments.peek().is_some() {
                            state.pending = attributes.alignment();
                            state.flush();
                        }
                    }
                }
                Operation::Embed { embed, .. } => {
                    if !state.buffer.is_empty() {
                        state.flush();
                    }
                    self.handle_embed(embed, &mut state);
                }
            }
        }

        if !state.buffer.is_empty() {
            state.flush();
        }

        log::debug!(
            "Segmented {} operations into {} paragraphs",
            ops.len(),
            state.paragraphs.len()
        );
        state.paragraphs
    }

    fn handle_embed(&self, embed: &Embed, state: &mut SegmentState) {
        match self.embed_policy {
            EmbedPolicy::Drop => {
                log::debug!("Dropping {} embed", embed.label());
            }
            EmbedPolicy::Placeholder => {
                let label = format!("[{}]", embed.label());
                let run = self.normalizer.run(&label, &AttributeSet::new());
                state
                    .paragraphs
                    .push(Paragraph::from_runs(vec![run], Alignment::Left));
            }
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(RunNormalizer::default(), EmbedPolicy::Drop)
    }
}

#[derive(Default)]
struct SegmentState {
    buffer: Vec<Run>,
    pending: Alignment,
    paragraphs: Vec<Paragraph>,
}

impl SegmentState {
    fn push(&mut self, run: Run) {
        self.buffer.push(run);
    }

    fn flush(&mut self) {
        let runs = std::mem::take(&mut self.buffer);
        let alignment = std::mem::take(&mut self.pending);
        self.paragraphs.push(Paragraph::from_runs(runs, alignment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::keys;

    fn texts(p: &Paragraph) -> Vec<&str> {
        p.runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_no_text_yields_blank_paragraph() {
        let paragraphs = Segmenter::default().segment(&[]);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].runs.len(), 1);
        assert!(paragraphs[0].runs[0].is_empty());
    }

    #[test]
    fn test_blank_paragraph_uses_default_font() {
        let segmenter = Segmenter::new(RunNormalizer::new("Georgia"), EmbedPolicy::Drop);
        let paragraphs = segmenter.segment(&[Operation::image("cat.png")]);

        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].runs[0].style.font, "Georgia");
        assert_eq!(paragraphs[0].alignment, Alignment::Left);
    }

    #[test]
    fn test_trailing_segment_flushed_at_end() {
        let paragraphs = Segmenter::default().segment(&[Operation::text("Hello\nWorld")]);

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(texts(&paragraphs[0]), vec!["Hello"]);
        assert_eq!(paragraphs[0].alignment, Alignment::Left);
        assert_eq!(texts(&paragraphs[1]), vec!["World"]);
        assert_eq!(paragraphs[1].alignment, Alignment::Left);
    }

    #[test]
    fn test_alignment_from_terminating_newline() {
        let center = AttributeSet::new().with(keys::ALIGN, "center");
        let ops = vec![
            Operation::styled("Centered", center.clone()),
            Operation::styled("\n", center),
        ];

        let paragraphs = Segmenter::default().segment(&ops);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].alignment, Alignment::Center);
        assert_eq!(texts(&paragraphs[0]), vec!["Centered"]);
    }

    #[test]
    fn test_alignment_resets_after_flush() {
        let ops = vec![
            Operation::text("Title"),
            Operation::styled("\n", AttributeSet::new().with(keys::ALIGN, "right")),
            Operation::text("Body\n"),
        ];

        let paragraphs = Segmenter::default().segment(&ops);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].alignment, Alignment::Right);
        assert_eq!(paragraphs[1].alignment, Alignment::Left);
    }

    #[test]
    fn test_runs_accumulate_across_operations() {
        let ops = vec![
            Operation::text("Plain "),
            Operation::styled("bold", AttributeSet::new().with(keys::BOLD, true)),
            Operation::text(" tail\n"),
        ];

        let paragraphs = Segmenter::default().segment(&ops);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(texts(&paragraphs[0]), vec!["Plain ", "bold", " tail"]);
        assert!(paragraphs[0].runs[1].style.bold);
        assert!(!paragraphs[0].runs[0].style.bold);
    }

    #[test]
    fn test_blank_lines_become_empty_paragraphs() {
        let paragraphs = Segmenter::default().segment(&[Operation::text("a\n\nb\n")]);

        assert_eq!(paragraphs.len(), 3);
        assert_eq!(texts(&paragraphs[0]), vec!["a"]);
        assert!(paragraphs[1].runs.is_empty());
        assert_eq!(texts(&paragraphs[2]), vec!["b"]);
    }

    #[test]
    fn test_embed_only_yields_no_paragraphs_before_fallback() {
        let ops = vec![Operation::image("data:image/png;base64,AAAA")];
        let segmenter = Segmenter::default();

        assert!(segmenter.split(&ops).is_empty());

        let paragraphs = segmenter.segment(&ops);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].runs.len(), 1);
        assert!(paragraphs[0].runs[0].is_empty());
    }

    #[test]
    fn test_embed_flushes_pending_text() {
        let ops = vec![
            Operation::text("before"),
            Operation::image("cat.png"),
            Operation::text("after\n"),
        ];

        let paragraphs = Segmenter::default().segment(&ops);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(texts(&paragraphs[0]), vec!["before"]);
        assert_eq!(texts(&paragraphs[1]), vec!["after"]);
    }

    #[test]
    fn test_embed_placeholder_policy() {
        let segmenter = Segmenter::new(RunNormalizer::default(), EmbedPolicy::Placeholder);
        let ops = vec![
            Operation::text("before"),
            Operation::image("cat.png"),
            Operation::text("\n"),
        ];

        let paragraphs = segmenter.segment(&ops);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(texts(&paragraphs[0]), vec!["before"]);
        assert_eq!(texts(&paragraphs[1]), vec!["[image]"]);
        assert!(paragraphs[2].runs.is_empty());
    }

    #[test]
    fn test_segmenting_is_idempotent() {
        let ops = vec![
            Operation::styled("Heading", AttributeSet::new().with(keys::SIZE, "24px")),
            Operation::styled("\n", AttributeSet::new().with(keys::ALIGN, "justify")),
            Operation::text("Body text\nmore"),
        ];
        let segmenter = Segmenter::default();

        assert_eq!(segmenter.segment(&ops), segmenter.segment(&ops));
    }
}
