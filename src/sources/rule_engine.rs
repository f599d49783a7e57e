//! Adaptador del motor de reglas gramaticales externo
//!
//! El motor es una capacidad opaca: dado un texto devuelve coincidencias
//! de reglas con rango, categoría, mensaje y reemplazos sugeridos. Aquí
//! solo se especifica su frontera y la tabla fija de clasificación hacia
//! los enums cerrados del modelo de datos.

use std::sync::Arc;

use tracing::warn;

use crate::error::EngineError;
use crate::report::{IssueCategory, Severity, TextIssue};

use super::{IssueSource, SourceKind};

/// Coincidencia nativa del motor externo.
#[derive(Debug, Clone)]
pub struct RuleMatch {
    pub start: usize,
    pub end: usize,
    pub rule_id: String,
    pub rule_category: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Frontera con el motor de reglas. La implementación real es un
/// colaborador externo (puede ser lenta o fallar con errores de E/S);
/// debe acotar su propio tiempo de espera.
pub trait RuleEngine: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<RuleMatch>, EngineError>;
}

/// Fuente que delega en el motor externo y clasifica sus coincidencias.
pub struct RuleEngineSource {
    engine: Arc<dyn RuleEngine>,
}

impl RuleEngineSource {
    pub fn new(engine: Arc<dyn RuleEngine>) -> Self {
        Self { engine }
    }

    /// Tabla fija de categorías: id/categoría nativos -> enum cerrado.
    fn categorize(rule_id: &str, rule_category: &str) -> IssueCategory {
        if rule_category.contains("GRAMMAR") || rule_id.contains("AGREEMENT") {
            IssueCategory::Grammar
        } else if rule_category.contains("PUNCTUATION") || rule_category.contains("TYPOGRAPHY") {
            IssueCategory::Punctuation
        } else if rule_category.contains("STYLE") || rule_id.contains("STYLE") {
            IssueCategory::Style
        } else if rule_id.contains("SPELL") || rule_category.contains("SPELL") {
            IssueCategory::Spelling
        } else {
            IssueCategory::Other
        }
    }

    fn severity_of(rule_id: &str, rule_category: &str) -> Severity {
        // Alta: errores de gramática y concordancia.
        if rule_id.contains("AGREEMENT")
            || rule_id.contains("WRONG_VERB")
            || rule_id.contains("SUBJECT_VERB")
            || rule_category == "GRAMMAR"
        {
            return Severity::High;
        }

        // Media: puntuación y errores comunes.
        if rule_category == "PUNCTUATION" || rule_id.contains("COMMA") || rule_id.contains("APOSTROPHE")
        {
            return Severity::Medium;
        }

        Severity::Low
    }
}

impl IssueSource for RuleEngineSource {
    fn kind(&self) -> SourceKind {
        SourceKind::RuleEngine
    }

    fn detect(&self, text: &str) -> Vec<TextIssue> {
        // Fallo abierto: si el motor no responde, esta fuente aporta cero
        // problemas y el análisis continúa con las demás.
        let matches = match self.engine.check(text) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, "motor de reglas no disponible, se omite la fuente");
                return Vec::new();
            }
        };

        matches
            .into_iter()
            .map(|m| {
                let original_span = text.get(m.start..m.end).unwrap_or_default().to_string();
                TextIssue {
                    start: m.start,
                    end: m.end,
                    category: Self::categorize(&m.rule_id, &m.rule_category),
                    severity: Self::severity_of(&m.rule_id, &m.rule_category),
                    original_span,
                    suggested_replacement: m.suggestions.into_iter().next(),
                    message: m.message,
                }
            })
            .collect()
    }
}
