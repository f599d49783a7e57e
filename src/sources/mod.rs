//! Fuentes de problemas
//!
//! Cada fuente inspecciona el texto de forma independiente y produce su
//! propia lista de problemas; no hay dependencias de datos entre fuentes,
//! por lo que pueden ejecutarse en paralelo dentro de una petición.

pub mod patterns;
pub mod rule_engine;
pub mod structural;
pub mod style_guide;

use std::sync::Arc;

use crate::report::TextIssue;

pub use patterns::PatternSource;
pub use rule_engine::{RuleEngine, RuleEngineSource, RuleMatch};
pub use structural::StructuralSource;
pub use style_guide::StyleGuideSource;

/// Identidad de una fuente. El orden de las variantes define la
/// precedencia al deduplicar rangos idénticos: motor de reglas primero,
/// heurísticas estructurales al final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceKind {
    RuleEngine,
    CustomPattern,
    StyleGuide,
    Structural,
}

impl SourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::RuleEngine => "rule_engine",
            SourceKind::CustomPattern => "custom_pattern",
            SourceKind::StyleGuide => "style_guide",
            SourceKind::Structural => "structural",
        }
    }
}

/// Capacidad común de todas las fuentes de problemas.
pub trait IssueSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Detecta problemas sobre el texto. Nunca falla: una fuente que no
    /// puede operar contribuye con una lista vacía.
    fn detect(&self, text: &str) -> Vec<TextIssue>;
}

/// Lista de fuentes por defecto, en orden de precedencia.
pub fn default_sources(engine: Option<Arc<dyn RuleEngine>>) -> Vec<Box<dyn IssueSource>> {
    let mut sources: Vec<Box<dyn IssueSource>> = Vec::with_capacity(4);
    if let Some(engine) = engine {
        sources.push(Box::new(RuleEngineSource::new(engine)));
    }
    sources.push(Box::new(PatternSource));
    sources.push(Box::new(StyleGuideSource));
    sources.push(Box::new(StructuralSource));
    sources
}
