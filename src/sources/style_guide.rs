//! Comprobaciones de guía de estilo
//!
//! Segunda tabla fija (estilo AP y pautas de escritura habituales);
//! produce problemas de estilo de severidad baja.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{IssueCategory, Severity, TextIssue};

use super::patterns::PatternRule;
use super::{IssueSource, SourceKind};

static STYLE_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    fn flag(pattern: &str, message: &'static str) -> PatternRule {
        PatternRule {
            regex: Regex::new(pattern).expect("regla de estilo inválida"),
            message,
            category: IssueCategory::Style,
            severity: Severity::Low,
            replacement: None,
        }
    }

    fn fix(pattern: &str, message: &'static str, replacement: &'static str) -> PatternRule {
        PatternRule {
            replacement: Some(replacement),
            ..flag(pattern, message)
        }
    }

    vec![
        flag(r"(?i)\bover\s+\d+\b", "AP Style: Use 'more than' with numbers"),
        fix(r"(?i)\balot\b", "Use 'a lot'", "a lot"),
        fix(r"(?i)\balright\b", "Use 'all right'", "all right"),
        flag(r"(?i)\bthat\s+which\b", "Use 'that' for restrictive clauses"),
        flag(
            r"(?i)\bwhich\s+[^,]",
            "Use comma before 'which' in non-restrictive clauses",
        ),
        flag(r"(?i)\bwho's\s+\w+\b", "Use 'whose' for possession"),
    ]
});

/// Fuente de reglas de guía de estilo.
pub struct StyleGuideSource;

impl IssueSource for StyleGuideSource {
    fn kind(&self) -> SourceKind {
        SourceKind::StyleGuide
    }

    fn detect(&self, text: &str) -> Vec<TextIssue> {
        STYLE_RULES
            .iter()
            .flat_map(|rule| rule.issues_in(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_with_number() {
        let issues = StyleGuideSource.detect("We sold over 100 units");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].original_span, "over 100");
        assert_eq!(issues[0].category, IssueCategory::Style);
        assert_eq!(issues[0].severity, Severity::Low);
    }

    #[test]
    fn test_alot_has_replacement() {
        let issues = StyleGuideSource.detect("Thanks alot");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].suggested_replacement.as_deref(), Some("a lot"));
    }

    #[test]
    fn test_which_without_comma() {
        let issues = StyleGuideSource.detect("the car which broke down");
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Use comma before 'which' in non-restrictive clauses"
        );
    }

    #[test]
    fn test_clean_text_no_matches() {
        assert!(StyleGuideSource.detect("This is a simple test sentence.").is_empty());
    }
}
