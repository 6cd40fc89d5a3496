//! Host-facing façade tying trigger, generation, rendering and selection together

use crate::buffer::{Position, TextBuffer, TextBufferMut};
use crate::config::SuggestConfig;
use crate::vocabulary::FixedVocabulary;

use super::candidate::{Candidate, CandidateGenerator};
use super::render::{render_spans, SuggestionSpan};
use super::select::SelectionApplier;
use super::trigger::{QueryContext, TriggerDetector};

/// Autocomplete for the `columns:` list of `jira-search` blocks.
///
/// The host calls [`on_trigger`](Self::on_trigger) on every keystroke, then
/// [`get_suggestions`](Self::get_suggestions) while a context is active, and
/// finally [`select_suggestion`](Self::select_suggestion) when the user picks
/// a row. The only state kept between calls is the active query context.
#[derive(Debug, Clone)]
pub struct ColumnSuggest {
    config: SuggestConfig,
    vocabulary: FixedVocabulary,
    detector: TriggerDetector,
    context: Option<QueryContext>,
}

impl ColumnSuggest {
    pub fn new(config: SuggestConfig) -> Self {
        Self::with_vocabulary(config, FixedVocabulary::search_columns())
    }

    pub fn with_vocabulary(config: SuggestConfig, vocabulary: FixedVocabulary) -> Self {
        let detector = TriggerDetector::new(&config.keyword, &config.fence_block);
        Self {
            config,
            vocabulary,
            detector,
            context: None,
        }
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// The context from the last successful trigger, if still active
    pub fn context(&self) -> Option<&QueryContext> {
        self.context.as_ref()
    }

    /// Evaluate the trigger at `cursor`; replaces any previous context.
    pub fn on_trigger<B>(&mut self, cursor: Position, buffer: &B) -> Option<QueryContext>
    where
        B: TextBuffer + ?Sized,
    {
        self.context = self.detector.detect(cursor, buffer);
        self.context.clone()
    }

    pub fn get_suggestions(&self, context: &QueryContext) -> Vec<Candidate> {
        CandidateGenerator::new(
            &self.vocabulary,
            &self.config.custom_fields,
            self.config.compact_symbol,
        )
        .suggestions(&context.query, self.config.limit)
    }

    pub fn render_suggestion(&self, candidate: &Candidate) -> Vec<SuggestionSpan> {
        render_spans(candidate, self.config.compact_symbol)
    }

    /// Apply `candidate` over the active query span and close the context.
    /// Returns `false` without touching the buffer when no context is active.
    pub fn select_suggestion<B>(&mut self, candidate: &Candidate, buffer: &mut B) -> bool
    where
        B: TextBufferMut + ?Sized,
    {
        let context = self.context.take();
        SelectionApplier::new(self.config.compact_symbol).select(
            candidate,
            context.as_ref(),
            buffer,
        )
    }

    /// Drop the active context, e.g. when the cursor moved away
    pub fn close(&mut self) {
        self.context = None;
    }
}

impl Default for ColumnSuggest {
    fn default() -> Self {
        Self::new(SuggestConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Document;

    #[test]
    fn test_full_cycle() {
        let mut doc = Document::with_text("```jira-search\ncolumns: KEY, sta\n```\n");
        let mut suggest = ColumnSuggest::default();

        let ctx = suggest.on_trigger(Position::new(1, 17), &doc).unwrap();
        assert_eq!(ctx.query, " sta");

        let candidates = suggest.get_suggestions(&ctx);
        assert_eq!(candidates[0].name, "STATUS");

        assert!(suggest.select_suggestion(&candidates[0], &mut doc));
        assert_eq!(doc.content(), "```jira-search\ncolumns: KEY, STATUS, \n```\n");
        assert!(suggest.context().is_none());
    }

    #[test]
    fn test_failed_trigger_clears_context() {
        let doc = Document::with_text("```jira-search\ncolumns: KEY\nquery: x");
        let mut suggest = ColumnSuggest::default();
        assert!(suggest.on_trigger(Position::new(1, 12), &doc).is_some());
        assert!(suggest.on_trigger(Position::new(2, 8), &doc).is_none());
        assert!(suggest.context().is_none());
    }

    #[test]
    fn test_select_after_close_is_noop() {
        let mut doc = Document::with_text("```jira-search\ncolumns: KE");
        let mut suggest = ColumnSuggest::default();
        let ctx = suggest.on_trigger(Position::new(1, 11), &doc).unwrap();
        let candidates = suggest.get_suggestions(&ctx);
        suggest.close();

        assert!(!suggest.select_suggestion(&candidates[0], &mut doc));
        assert_eq!(doc.content(), "```jira-search\ncolumns: KE");
    }

    #[test]
    fn test_limit_from_config() {
        let config = SuggestConfig {
            limit: 2,
            ..SuggestConfig::default()
        };
        let suggest = ColumnSuggest::new(config);
        let ctx = QueryContext {
            query: String::new(),
            start: Position::new(0, 0),
            end: Position::new(0, 0),
        };
        assert_eq!(suggest.get_suggestions(&ctx).len(), 2);
    }
}
