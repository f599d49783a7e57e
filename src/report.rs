//! Modelo de datos del informe de análisis

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Categoría cerrada de un problema detectado.
/// Las categorías desconocidas de fuentes externas se mapean a `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCategory {
    Grammar,
    Spelling,
    Punctuation,
    Style,
    Other,
}

/// Severidad ordinal de un problema.
/// El peso numérico es un valor de la política de puntuación,
/// no una propiedad del problema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Un problema detectado sobre un rango [start, end) del texto original.
///
/// Inmutable una vez creado por su fuente: las correcciones producen un
/// texto nuevo, nunca un problema nuevo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextIssue {
    /// Offset inicial (en bytes, sobre frontera de carácter) en el texto original.
    pub start: usize,
    /// Offset final exclusivo.
    pub end: usize,
    pub category: IssueCategory,
    pub severity: Severity,
    /// Subcadena exacta en `[start, end)`, conservada para auditoría
    /// aunque los offsets dejen de ser válidos tras aplicar correcciones.
    pub original_span: String,
    /// Reemplazo sugerido; `None` o vacío significa "solo señalar".
    pub suggested_replacement: Option<String>,
    /// Explicación legible, opaca para el algoritmo.
    pub message: String,
}

impl TextIssue {
    /// Verifica que el rango cae dentro del texto y sobre fronteras de carácter.
    pub fn range_is_valid(&self, text: &str) -> bool {
        self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    /// Indica si el problema trae un reemplazo aplicable.
    pub fn has_replacement(&self) -> bool {
        self.suggested_replacement
            .as_deref()
            .map_or(false, |s| !s.is_empty())
    }
}

/// Métricas derivadas del texto y de los problemas resueltos.
/// Se recalculan en cada petición; no tienen identidad persistente.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub word_count: usize,
    /// Siempre >= 1: varios divisores posteriores dependen de ello.
    pub sentence_count: usize,
    pub grammar_errors: usize,
    pub spelling_errors: usize,
    pub punctuation_errors: usize,
    pub style_issues: usize,
    pub other_issues: usize,
    /// Facilidad de lectura estilo Flesch, acotada a [0, 100].
    pub readability_score: f64,
    /// Palabras únicas (en minúsculas) / palabras totales.
    pub lexical_diversity: f64,
    pub average_words_per_sentence: f64,
    pub average_syllables_per_word: f64,
}

/// Resultado agregado de un análisis. Se crea una vez por petición;
/// la persistencia es asunto de un colaborador externo.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub original_text: String,
    pub corrected_text: String,
    /// Problemas resueltos, ordenados ascendentemente por `start`.
    pub issues: Vec<TextIssue>,
    pub metrics: Metrics,
    /// Puntuación final entera en [0, 100].
    pub final_score: i32,
    pub checked_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }
}
