//! Comprobaciones por patrones fijos
//!
//! Tabla compilada una sola vez y compartida entre peticiones (lectura
//! concurrente segura, nunca mutada tras el arranque). Cada coincidencia
//! produce un problema con la categoría, severidad y reemplazo que la
//! tabla asigna.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{IssueCategory, Severity, TextIssue};

use super::{IssueSource, SourceKind};

pub(crate) struct PatternRule {
    pub regex: Regex,
    pub message: &'static str,
    pub category: IssueCategory,
    pub severity: Severity,
    /// Reemplazo fijo para la coincidencia completa; None = solo señalar.
    pub replacement: Option<&'static str>,
}

impl PatternRule {
    fn flag(pattern: &str, message: &'static str, category: IssueCategory, severity: Severity) -> Self {
        Self {
            regex: Regex::new(pattern).expect("patrón fijo inválido"),
            message,
            category,
            severity,
            replacement: None,
        }
    }

    fn fix(
        pattern: &str,
        message: &'static str,
        category: IssueCategory,
        severity: Severity,
        replacement: &'static str,
    ) -> Self {
        Self {
            replacement: Some(replacement),
            ..Self::flag(pattern, message, category, severity)
        }
    }

    pub fn issues_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = TextIssue> + 'a {
        self.regex.find_iter(text).map(move |m| TextIssue {
            start: m.start(),
            end: m.end(),
            category: self.category,
            severity: self.severity,
            original_span: m.as_str().to_string(),
            suggested_replacement: self.replacement.map(str::to_string),
            message: self.message.to_string(),
        })
    }
}

static CUSTOM_PATTERNS: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    use IssueCategory::*;
    use Severity::*;

    vec![
        // Concordancia sujeto-verbo
        PatternRule::flag(
            r"(?i)\b(he|she|it)\s+(are|were)\b",
            "Subject-verb disagreement",
            Grammar,
            High,
        ),
        PatternRule::flag(
            r"(?i)\b(they|we|you)\s+(is|was)\b",
            "Subject-verb disagreement",
            Grammar,
            High,
        ),
        // Confusiones comunes
        PatternRule::flag(
            r"(?i)\bthen\s+(\w+ing|\w+ed)\b",
            "Consider 'than' for comparisons",
            Grammar,
            High,
        ),
        PatternRule::flag(
            r"(?i)\baffect\s+on\b",
            "Use 'effect' as noun, 'affect' as verb",
            Grammar,
            High,
        ),
        PatternRule::fix(
            r"(?i)\bcould\s+care\s+less\b",
            "Did you mean 'couldn't care less'?",
            Grammar,
            High,
            "couldn't care less",
        ),
        // Redundancias
        PatternRule::flag(
            r"(?i)\b(very|really|extremely)\s+(very|really|extremely)\b",
            "Avoid double intensifiers",
            Grammar,
            High,
        ),
        PatternRule::flag(
            r"(?i)\b(more|most)\s+\w+er\b",
            "Avoid double comparatives",
            Grammar,
            High,
        ),
        PatternRule::flag(
            r"(?i)\b(more|most)\s+\w+est\b",
            "Avoid double superlatives",
            Grammar,
            High,
        ),
        // Erratas frecuentes, con corrección automática
        PatternRule::fix(r"(?i)\bteh\b", "Spelling correction", Spelling, Medium, "the"),
        PatternRule::fix(r"(?i)\badn\b", "Spelling correction", Spelling, Medium, "and"),
        PatternRule::fix(r"(?i)\brecieve\b", "Spelling correction", Spelling, Medium, "receive"),
        PatternRule::fix(r"(?i)\bseperate\b", "Spelling correction", Spelling, Medium, "separate"),
        PatternRule::fix(
            r"(?i)\bdefinately\b",
            "Spelling correction",
            Spelling,
            Medium,
            "definitely",
        ),
        // your / you're
        PatternRule::fix(
            r"(?i)\byour\s+welcome\b",
            "Use 'you're' (you are)",
            Grammar,
            Medium,
            "you're welcome",
        ),
        PatternRule::fix(
            r"(?i)\byour\s+going\b",
            "Use 'you're' (you are)",
            Grammar,
            Medium,
            "you're going",
        ),
        PatternRule::fix(
            r"(?i)\byour\s+coming\b",
            "Use 'you're' (you are)",
            Grammar,
            Medium,
            "you're coming",
        ),
        // Espacios duplicados
        PatternRule::fix(r" {2,}", "Extra spaces", Punctuation, Low, " "),
    ]
});

/// Fuente de patrones personalizados.
pub struct PatternSource;

impl IssueSource for PatternSource {
    fn kind(&self) -> SourceKind {
        SourceKind::CustomPattern
    }

    fn detect(&self, text: &str) -> Vec<TextIssue> {
        CUSTOM_PATTERNS
            .iter()
            .flat_map(|rule| rule.issues_in(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_verb_disagreement() {
        let issues = PatternSource.detect("He are happy.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].original_span, "He are");
        assert_eq!(issues[0].start, 0);
        assert_eq!(issues[0].end, 6);
        assert_eq!(issues[0].category, IssueCategory::Grammar);
        assert_eq!(issues[0].severity, Severity::High);
        assert!(issues[0].suggested_replacement.is_none());
    }

    #[test]
    fn test_case_insensitive_match() {
        let issues = PatternSource.detect("THEY IS here");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].original_span, "THEY IS");
    }

    #[test]
    fn test_could_care_less() {
        let issues = PatternSource.detect("I could care less about it");
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].suggested_replacement.as_deref(),
            Some("couldn't care less")
        );
    }

    #[test]
    fn test_misspelling_has_replacement() {
        let issues = PatternSource.detect("I definately agree");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::Spelling);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].suggested_replacement.as_deref(), Some("definitely"));
    }

    #[test]
    fn test_double_intensifier() {
        let issues = PatternSource.detect("this is very very good");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Avoid double intensifiers");
    }

    #[test]
    fn test_extra_spaces() {
        let issues = PatternSource.detect("hello  world");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].start, 5);
        assert_eq!(issues[0].end, 7);
        assert_eq!(issues[0].suggested_replacement.as_deref(), Some(" "));
    }

    #[test]
    fn test_clean_text_no_matches() {
        assert!(PatternSource.detect("This is a simple test sentence.").is_empty());
    }
}
