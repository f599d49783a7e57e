//! Analizador - Motor de análisis de calidad de texto
//!
//! Detecta problemas de gramática, ortografía, puntuación y estilo sobre
//! texto en inglés, aplica las correcciones sugeridas y reduce todo a una
//! puntuación acotada [0, 100].

pub mod analyzer;
pub mod config;
pub mod corrections;
pub mod error;
pub mod metrics;
pub mod report;
pub mod resolver;
pub mod scoring;
pub mod sources;
pub mod text;

pub use analyzer::Analyzer;
pub use config::Config;
pub use error::AnalysisError;
pub use report::{AnalysisReport, IssueCategory, Metrics, Severity, TextIssue};
pub use scoring::ScoringPolicy;
