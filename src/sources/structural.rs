//! Heurísticas estructurales
//!
//! Reutilizan la segmentación de oraciones: frases demasiado largas y
//! voz pasiva, ambas como problemas de estilo de severidad baja.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{IssueCategory, Severity, TextIssue};
use crate::text::segmenter;

use super::{IssueSource, SourceKind};

/// Palabras a partir de las cuales una oración se considera larga.
const LONG_SENTENCE_WORDS: usize = 25;

static PASSIVE_VOICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(is|are|was|were|being|been)\s+(\w+ed|\w+en)\b")
        .expect("patrón de voz pasiva inválido")
});

/// Fuente de heurísticas estructurales.
pub struct StructuralSource;

impl IssueSource for StructuralSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Structural
    }

    fn detect(&self, text: &str) -> Vec<TextIssue> {
        let mut issues = Vec::new();
        let seg = segmenter::segment(text);

        for sentence in &seg.sentences {
            let word_count = seg.words.iter().filter(|w| sentence.contains(w)).count();
            if word_count > LONG_SENTENCE_WORDS {
                issues.push(TextIssue {
                    start: sentence.start,
                    end: sentence.end,
                    category: IssueCategory::Style,
                    severity: Severity::Low,
                    original_span: sentence.slice(text).to_string(),
                    suggested_replacement: None,
                    message: format!(
                        "Consider breaking this long sentence (contains {} words)",
                        word_count
                    ),
                });
            }
        }

        for m in PASSIVE_VOICE_RE.find_iter(text) {
            issues.push(TextIssue {
                start: m.start(),
                end: m.end(),
                category: IssueCategory::Style,
                severity: Severity::Low,
                original_span: m.as_str().to_string(),
                suggested_replacement: None,
                message: "Consider using active voice for clearer writing".to_string(),
            });
        }

        issues
    }
}
