//! Política de puntuación y cálculo de la puntuación final
//!
//! La política se suministra externamente y es inmutable durante la
//! evaluación. `score` es una función pura de (métricas, problemas,
//! política); el resultado siempre queda en [0, 100].

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::report::{Metrics, Severity, TextIssue};

/// Deducciones por severidad. Cada severidad sin peso configurado usa
/// `default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityDeductions {
    pub high: Option<i32>,
    pub medium: Option<i32>,
    pub low: Option<i32>,
    pub default: i32,
}

impl SeverityDeductions {
    pub fn for_severity(&self, severity: Severity) -> i32 {
        let configured = match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        };
        configured.unwrap_or(self.default)
    }
}

/// Umbral de densidad de errores con su penalización asociada.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DensityPenalty {
    pub threshold: f64,
    pub penalty: i32,
}

/// Ajuste por legibilidad: exactamente una rama se aplica.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReadabilityAdjustment {
    /// Por debajo de este umbral se penaliza.
    pub penalty_threshold: f64,
    pub penalty: i32,
    /// Por encima de este umbral (y no del alto) se bonifica.
    pub bonus_medium_threshold: f64,
    pub bonus_medium: i32,
    /// Por encima de este umbral se aplica la bonificación mayor.
    pub bonus_high_threshold: f64,
    pub bonus_high: i32,
}

/// Extensión opcional: los textos largos escalan la puntuación al alza
/// (son más difíciles de dejar perfectos).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LengthScaling {
    pub min_words: usize,
    pub words_divisor: f64,
    pub max_factor: f64,
}

/// Extensión opcional: bonificación/penalización por diversidad léxica.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DiversityAdjustment {
    pub bonus_threshold: f64,
    pub bonus: i32,
    pub penalty_threshold: f64,
    pub penalty: i32,
}

/// Política declarativa de puntuación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub base_score: i32,
    pub deductions: SeverityDeductions,
    /// Umbrales ascendentes de densidad de errores; se aplica como mucho
    /// uno (el mayor superado gana).
    pub density_low: DensityPenalty,
    pub density_medium: DensityPenalty,
    pub density_high: DensityPenalty,
    pub readability: ReadabilityAdjustment,
    /// Extensiones opcionales; desactivadas por defecto.
    pub length_scaling: Option<LengthScaling>,
    pub diversity: Option<DiversityAdjustment>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base_score: 100,
            deductions: SeverityDeductions {
                high: Some(8),
                medium: Some(4),
                low: Some(2),
                default: 1,
            },
            density_low: DensityPenalty { threshold: 0.05, penalty: 5 },
            density_medium: DensityPenalty { threshold: 0.10, penalty: 10 },
            density_high: DensityPenalty { threshold: 0.20, penalty: 20 },
            readability: ReadabilityAdjustment {
                penalty_threshold: 30.0,
                penalty: 5,
                bonus_medium_threshold: 60.0,
                bonus_medium: 3,
                bonus_high_threshold: 80.0,
                bonus_high: 5,
            },
            length_scaling: None,
            diversity: None,
        }
    }
}

impl ScoringPolicy {
    /// Valida la monotonía de los grupos ordenados de umbrales.
    /// Violarla es un error de configuración, nunca de ejecución.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(self.density_low.threshold < self.density_medium.threshold
            && self.density_medium.threshold < self.density_high.threshold)
        {
            return Err(AnalysisError::InvalidPolicy(
                "los umbrales de densidad deben ser estrictamente crecientes".to_string(),
            ));
        }
        if !(self.readability.penalty_threshold < self.readability.bonus_medium_threshold
            && self.readability.bonus_medium_threshold < self.readability.bonus_high_threshold)
        {
            return Err(AnalysisError::InvalidPolicy(
                "los umbrales de legibilidad deben ser estrictamente crecientes".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reduce problemas y métricas a una puntuación entera en [0, 100].
///
/// Orden del cálculo: base, deducciones por severidad, una única
/// penalización por densidad (el umbral más alto superado), una única
/// rama de legibilidad, extensiones opcionales, recorte final.
pub fn score(metrics: &Metrics, resolved: &[TextIssue], policy: &ScoringPolicy) -> i32 {
    let mut s = policy.base_score;

    for issue in resolved {
        s -= policy.deductions.for_severity(issue.severity);
    }

    // Penalización por densidad: se comprueba de mayor a menor y solo
    // se aplica la primera que supere su umbral, sin acumular.
    let error_rate = resolved.len() as f64 / metrics.word_count.max(1) as f64;
    if error_rate > policy.density_high.threshold {
        s -= policy.density_high.penalty;
    } else if error_rate > policy.density_medium.threshold {
        s -= policy.density_medium.penalty;
    } else if error_rate > policy.density_low.threshold {
        s -= policy.density_low.penalty;
    }

    // Ajuste por legibilidad: exactamente una rama.
    let r = metrics.readability_score;
    if r > policy.readability.bonus_high_threshold {
        s += policy.readability.bonus_high;
    } else if r > policy.readability.bonus_medium_threshold {
        s += policy.readability.bonus_medium;
    } else if r < policy.readability.penalty_threshold {
        s -= policy.readability.penalty;
    }

    if let Some(scaling) = &policy.length_scaling {
        if metrics.word_count > scaling.min_words {
            let extra = (metrics.word_count - scaling.min_words) as f64;
            let factor = (1.0 + extra / scaling.words_divisor).min(scaling.max_factor);
            s = (s as f64 * factor) as i32;
        }
    }

    if let Some(diversity) = &policy.diversity {
        if metrics.lexical_diversity > diversity.bonus_threshold {
            s += diversity.bonus;
        } else if metrics.lexical_diversity < diversity.penalty_threshold {
            s -= diversity.penalty;
        }
    }

    s.clamp(0, 100)
}
