//! Resolución de problemas: deduplicación y orden determinista

use std::collections::HashSet;

use tracing::warn;

use crate::report::TextIssue;

/// Deduplica y ordena los problemas de todas las fuentes.
///
/// La clave de deduplicación es `(start, end)`: problemas de fuentes
/// distintas sobre el mismo rango exacto colapsan en uno, conservando el
/// primero en orden de precedencia de fuentes (el orden de llegada de la
/// lista de entrada). Rangos parcialmente solapados pero no idénticos
/// coexisten a propósito: solo se funden los duplicados exactos.
///
/// Los rangos que exceden el texto o caen fuera de frontera de carácter
/// se descartan y se registran; el procesamiento continúa.
pub fn resolve(text: &str, issues: Vec<TextIssue>) -> Vec<TextIssue> {
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(issues.len());
    let mut resolved: Vec<TextIssue> = Vec::with_capacity(issues.len());

    for issue in issues {
        if !issue.range_is_valid(text) {
            warn!(
                start = issue.start,
                end = issue.end,
                len = text.len(),
                "se descarta problema con rango fuera del texto"
            );
            continue;
        }
        if seen.insert((issue.start, issue.end)) {
            resolved.push(issue);
        }
    }

    // Orden ascendente por inicio; el empate conserva el orden de
    // detección original (orden estable, requerido para determinismo).
    resolved.sort_by_key(|issue| issue.start);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{IssueCategory, Severity};

    fn issue(start: usize, end: usize, message: &str) -> TextIssue {
        TextIssue {
            start,
            end,
            category: IssueCategory::Grammar,
            severity: Severity::High,
            original_span: String::new(),
            suggested_replacement: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_exact_duplicates_keep_first_seen() {
        let text = "He are happy.";
        let resolved = resolve(
            text,
            vec![issue(0, 6, "from engine"), issue(0, 6, "from pattern")],
        );
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].message, "from engine");
    }

    #[test]
    fn test_partial_overlaps_coexist() {
        let text = "He are happy.";
        let resolved = resolve(text, vec![issue(0, 6, "a"), issue(3, 12, "b")]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_sorted_by_start_stable() {
        let text = "He are very very happy.";
        let resolved = resolve(
            text,
            vec![issue(7, 16, "later"), issue(0, 6, "first"), issue(7, 11, "tie")],
        );
        let messages: Vec<&str> = resolved.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "later", "tie"]);
    }

    #[test]
    fn test_out_of_bounds_dropped() {
        let text = "short";
        let resolved = resolve(text, vec![issue(0, 99, "oob"), issue(0, 5, "ok")]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].message, "ok");
    }

    #[test]
    fn test_non_char_boundary_dropped() {
        let text = "café!";
        // 'é' ocupa los bytes 3..5; el byte 4 no es frontera.
        let resolved = resolve(text, vec![issue(3, 4, "mitad"), issue(0, 4, "mitad2")]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_deterministic_idempotent() {
        let text = "He are happy and they is sad.";
        let input = vec![issue(0, 6, "a"), issue(17, 24, "b"), issue(0, 6, "c")];
        let once = resolve(text, input.clone());
        let twice = resolve(text, input);
        assert_eq!(once, twice);
    }
}
