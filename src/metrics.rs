//! Cálculo de métricas del texto

use std::collections::HashSet;

use crate::report::{IssueCategory, Metrics, TextIssue};
use crate::text::segmenter::Segmentation;
use crate::text::syllables;

/// Calcula las métricas a partir del texto, su segmentación y los
/// problemas ya resueltos.
pub fn calculate(text: &str, seg: &Segmentation, resolved: &[TextIssue]) -> Metrics {
    let word_count = seg.words.len();
    let sentence_count = seg.sentences.len().max(1);

    let mut grammar_errors = 0usize;
    let mut spelling_errors = 0usize;
    let mut punctuation_errors = 0usize;
    let mut style_issues = 0usize;
    let mut other_issues = 0usize;
    for issue in resolved {
        match issue.category {
            IssueCategory::Grammar => grammar_errors += 1,
            IssueCategory::Spelling => spelling_errors += 1,
            IssueCategory::Punctuation => punctuation_errors += 1,
            IssueCategory::Style => style_issues += 1,
            IssueCategory::Other => other_issues += 1,
        }
    }

    let average_words_per_sentence = word_count as f64 / sentence_count as f64;

    let average_syllables_per_word = if word_count == 0 {
        0.0
    } else {
        let total: usize = seg
            .words
            .iter()
            .map(|span| syllables::count_syllables(span.slice(text)))
            .sum();
        total as f64 / word_count as f64
    };

    let readability_score =
        syllables::readability(average_words_per_sentence, average_syllables_per_word);

    let lexical_diversity = if word_count == 0 {
        0.0
    } else {
        let unique: HashSet<String> = seg
            .words
            .iter()
            .map(|span| span.slice(text).to_lowercase())
            .collect();
        unique.len() as f64 / word_count as f64
    };

    Metrics {
        word_count,
        sentence_count,
        grammar_errors,
        spelling_errors,
        punctuation_errors,
        style_issues,
        other_issues,
        readability_score,
        lexical_diversity,
        average_words_per_sentence,
        average_syllables_per_word,
    }
}
