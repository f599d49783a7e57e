//! Motor principal de análisis
//!
//! Una única canalización parametrizada por la política de puntuación y
//! la lista de fuentes inyectadas. Sin estado por petición más allá de la
//! inicialización: las tablas compiladas y el cliente del motor de reglas
//! son compartidos y de solo lectura.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::corrections;
use crate::error::AnalysisError;
use crate::metrics;
use crate::report::{AnalysisReport, TextIssue};
use crate::resolver;
use crate::scoring::{self, ScoringPolicy};
use crate::sources::{self, IssueSource, RuleEngine};
use crate::text::segmenter;

/// Longitud máxima de entrada por defecto, en caracteres.
pub const DEFAULT_MAX_TEXT_LEN: usize = 10_000;

type ReportCache = Mutex<HashMap<String, Arc<OnceCell<AnalysisReport>>>>;

/// Motor de análisis de calidad de texto.
pub struct Analyzer {
    sources: Vec<Box<dyn IssueSource>>,
    policy: ScoringPolicy,
    max_text_len: usize,
    cache: Option<ReportCache>,
}

impl Analyzer {
    /// Crea un analizador con las fuentes por defecto y sin motor de
    /// reglas externo. Valida la política; una política inválida es
    /// fatal aquí, nunca durante un análisis.
    pub fn new(policy: ScoringPolicy) -> Result<Self, AnalysisError> {
        Self::with_sources(policy, sources::default_sources(None))
    }

    /// Crea un analizador con las fuentes por defecto más el adaptador
    /// del motor de reglas externo en cabeza de la precedencia.
    pub fn with_engine(
        policy: ScoringPolicy,
        engine: Arc<dyn RuleEngine>,
    ) -> Result<Self, AnalysisError> {
        Self::with_sources(policy, sources::default_sources(Some(engine)))
    }

    /// Crea un analizador con una lista de fuentes arbitraria; el orden
    /// de la lista define la precedencia de deduplicación.
    pub fn with_sources(
        policy: ScoringPolicy,
        sources: Vec<Box<dyn IssueSource>>,
    ) -> Result<Self, AnalysisError> {
        policy.validate()?;
        Ok(Self {
            sources,
            policy,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            cache: None,
        })
    }

    /// Activa la memoización de informes completos por texto exacto.
    /// Cada texto distinto se calcula como mucho una vez; las entradas
    /// son inmutables una vez escritas.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Mutex::new(HashMap::new()));
        self
    }

    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Analiza un texto y produce el informe completo.
    ///
    /// Precondición documentada: texto no vacío tras recortar y dentro
    /// de la longitud máxima. Ningún fallo de una fuente individual ni
    /// del aplicador de correcciones aborta la canalización.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyText);
        }
        let len = text.chars().count();
        if len > self.max_text_len {
            return Err(AnalysisError::TextTooLong {
                len,
                max: self.max_text_len,
            });
        }

        if let Some(cache) = &self.cache {
            let cell = {
                let mut map = cache.lock();
                map.entry(text.to_string())
                    .or_insert_with(|| Arc::new(OnceCell::new()))
                    .clone()
            };
            // OnceCell garantiza un único cálculo por texto aunque haya
            // peticiones concurrentes sobre el mismo valor.
            return Ok(cell.get_or_init(|| self.run_pipeline(text)).clone());
        }

        Ok(self.run_pipeline(text))
    }

    fn run_pipeline(&self, text: &str) -> AnalysisReport {
        // Las fuentes no dependen entre sí: se ejecutan en paralelo y se
        // reúnen en orden de precedencia antes de resolver.
        let per_source: Vec<Vec<TextIssue>> = self
            .sources
            .par_iter()
            .map(|source| source.detect(text))
            .collect();
        for (source, found) in self.sources.iter().zip(&per_source) {
            debug!(
                source = source.kind().name(),
                count = found.len(),
                "fuente ejecutada"
            );
        }
        let issues: Vec<TextIssue> = per_source.into_iter().flatten().collect();

        let resolved = resolver::resolve(text, issues);
        let corrected_text = corrections::apply(text, &resolved);

        let seg = segmenter::segment(text);
        let metrics = metrics::calculate(text, &seg, &resolved);
        let final_score = scoring::score(&metrics, &resolved, &self.policy);

        info!(
            score = final_score,
            issues = resolved.len(),
            text_len = text.len(),
            "análisis completado"
        );

        AnalysisReport {
            original_text: text.to_string(),
            corrected_text,
            issues: resolved,
            metrics,
            final_score,
            checked_at: Utc::now(),
        }
    }
}
