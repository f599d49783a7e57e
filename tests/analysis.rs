//! Tests de integración de la canalización de análisis.
//!
//! Ejecutar solo estos tests:  cargo test --test analysis

use std::sync::Arc;

use analizador::sources::{RuleEngine, RuleMatch};
use analizador::{AnalysisError, Analyzer, IssueCategory, ScoringPolicy, Severity};

fn create_analyzer() -> Analyzer {
    Analyzer::new(ScoringPolicy::default()).expect("Failed to create analyzer")
}

/// Motor de reglas estático para los tests: devuelve siempre las mismas
/// coincidencias, sin E/S real.
struct StaticEngine(Vec<RuleMatch>);

impl RuleEngine for StaticEngine {
    fn check(&self, _text: &str) -> Result<Vec<RuleMatch>, analizador::error::EngineError> {
        Ok(self.0.clone())
    }
}

struct BrokenEngine;

impl RuleEngine for BrokenEngine {
    fn check(&self, _text: &str) -> Result<Vec<RuleMatch>, analizador::error::EngineError> {
        Err(analizador::error::EngineError::Io("socket cerrado".to_string()))
    }
}

#[test]
fn test_scenario_subject_verb_disagreement() {
    // "He are happy." debe producir un problema de gramática de severidad
    // alta sobre el rango de "He are" y una puntuación menor que 100.
    let report = create_analyzer().analyze("He are happy.").expect("analiza");

    let grammar: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.category == IssueCategory::Grammar)
        .collect();
    assert_eq!(grammar.len(), 1, "problemas: {:?}", report.issues);
    assert_eq!(grammar[0].original_span, "He are");
    assert_eq!(grammar[0].severity, Severity::High);
    assert!(
        report.final_score < 100,
        "La puntuación debería bajar de 100: {}",
        report.final_score
    );
}

#[test]
fn test_scenario_clean_text() {
    // Sin problemas de ninguna fuente: el texto corregido es el original
    // y la puntuación es la base ajustada solo por la rama de legibilidad.
    let report = create_analyzer()
        .analyze("This is a simple test sentence.")
        .expect("analiza");

    assert!(report.issues.is_empty(), "problemas: {:?}", report.issues);
    assert_eq!(report.corrected_text, report.original_text);
    // Base 100, legibilidad recortada a 100 (> 80) suma 5, recorte a 100.
    assert_eq!(report.final_score, 100);
    assert_eq!(report.metrics.word_count, 6);
    assert_eq!(report.metrics.sentence_count, 1);
}

#[test]
fn test_scenario_same_range_keeps_higher_precedence_source() {
    // El motor externo y el patrón personalizado señalan exactamente el
    // mismo rango (0, 6) de "He are happy.": debe sobrevivir solo el del
    // motor, que precede en el orden de fuentes.
    let engine = StaticEngine(vec![RuleMatch {
        start: 0,
        end: 6,
        rule_id: "SUBJECT_VERB_AGREEMENT".to_string(),
        rule_category: "GRAMMAR".to_string(),
        message: "engine wins".to_string(),
        suggestions: vec!["He is".to_string()],
    }]);
    let analyzer =
        Analyzer::with_engine(ScoringPolicy::default(), Arc::new(engine)).expect("crea analizador");

    let report = analyzer.analyze("He are happy.").expect("analiza");
    let at_range: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.start == 0 && i.end == 6)
        .collect();
    assert_eq!(at_range.len(), 1);
    assert_eq!(at_range[0].message, "engine wins");
    // Y su sugerencia se aplica al texto corregido.
    assert_eq!(report.corrected_text, "He is happy.");
}

#[test]
fn test_scenario_long_sentence_without_terminator() {
    // Una oración de 40 palabras sin terminador dispara la heurística de
    // oración larga (estilo/baja) y cuenta como una única oración.
    let text = (0..40).map(|i| format!("token{i}")).collect::<Vec<_>>().join(" ");
    let report = create_analyzer().analyze(&text).expect("analiza");

    assert_eq!(report.metrics.sentence_count, 1);
    let long: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.message.contains("long sentence"))
        .collect();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].category, IssueCategory::Style);
    assert_eq!(long[0].severity, Severity::Low);
    assert!(long[0].message.contains("40 words"), "{}", long[0].message);
}

#[test]
fn test_engine_failure_degrades_to_remaining_sources() {
    // Fallo abierto: el motor caído no aborta el análisis; los patrones
    // personalizados siguen detectando.
    let analyzer = Analyzer::with_engine(ScoringPolicy::default(), Arc::new(BrokenEngine))
        .expect("crea analizador");
    let report = analyzer.analyze("He are happy.").expect("analiza");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].original_span, "He are");
}

#[test]
fn test_out_of_bounds_engine_range_dropped() {
    // Un rango del motor que excede el texto se descarta durante la
    // resolución; el resto del informe se produce igualmente.
    let engine = StaticEngine(vec![RuleMatch {
        start: 0,
        end: 500,
        rule_id: "X".to_string(),
        rule_category: "GRAMMAR".to_string(),
        message: "rango imposible".to_string(),
        suggestions: vec!["boom".to_string()],
    }]);
    let analyzer =
        Analyzer::with_engine(ScoringPolicy::default(), Arc::new(engine)).expect("crea analizador");

    let report = analyzer.analyze("Short text here.").expect("analiza");
    assert!(report.issues.is_empty());
    assert_eq!(report.corrected_text, "Short text here.");
}

#[test]
fn test_corrections_applied_back_to_front() {
    // Varias erratas con reemplazos: los offsets del texto original deben
    // seguir siendo válidos aunque cambien las longitudes.
    let report = create_analyzer()
        .analyze("I definately recieve teh gift.")
        .expect("analiza");
    assert_eq!(report.corrected_text, "I definitely receive the gift.");
    assert_eq!(report.metrics.spelling_errors, 3);
}

#[test]
fn test_issue_ranges_valid_and_sorted() {
    let text = "He are happy about teh results and they is glad,  mostly.";
    let report = create_analyzer().analyze(text).expect("analiza");
    assert!(!report.issues.is_empty());

    let mut previous_start = 0usize;
    for issue in &report.issues {
        assert!(issue.start <= issue.end);
        assert!(issue.end <= report.original_text.len());
        assert!(issue.start >= previous_start, "orden por inicio roto");
        previous_start = issue.start;
    }
}

#[test]
fn test_analysis_deterministic() {
    let text = "He are happy about teh results and they is glad.";
    let a = create_analyzer().analyze(text).expect("analiza");
    let b = create_analyzer().analyze(text).expect("analiza");
    assert_eq!(a.issues, b.issues);
    assert_eq!(a.final_score, b.final_score);
    assert_eq!(a.corrected_text, b.corrected_text);
}

#[test]
fn test_score_bounds_on_error_dense_text() {
    // Texto plagado de errores: la puntuación nunca baja de 0.
    let text = "He are bad. They is bad. We was bad. teh adn recieve seperate definately alot";
    let report = create_analyzer().analyze(text).expect("analiza");
    assert!((0..=100).contains(&report.final_score), "{}", report.final_score);
}

#[test]
fn test_empty_input_precondition() {
    assert!(matches!(
        create_analyzer().analyze("\n\t  "),
        Err(AnalysisError::EmptyText)
    ));
}

#[test]
fn test_report_serializes_to_json() {
    let report = create_analyzer().analyze("He are happy.").expect("analiza");
    let json = serde_json::to_string(&report).expect("serializa");
    assert!(json.contains("\"final_score\""));
    assert!(json.contains("\"corrected_text\""));
    assert!(json.contains("\"checked_at\""));
}
