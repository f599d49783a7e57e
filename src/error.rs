//! Errores del analizador

use thiserror::Error;

/// Errores que pueden abortar un análisis.
///
/// Los fallos recuperables (motor de reglas caído, rangos fuera del texto,
/// correcciones no aplicables) NO aparecen aquí: se degradan localmente y
/// se registran, porque siempre debe producirse un informe parcial.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// El texto quedó vacío tras recortar espacios.
    #[error("el texto está vacío")]
    EmptyText,

    /// El texto supera la longitud máxima configurada.
    #[error("el texto supera la longitud máxima ({len} > {max} caracteres)")]
    TextTooLong { len: usize, max: usize },

    /// La política de puntuación no es válida (umbrales no monótonos).
    /// Fatal al construir el analizador, nunca durante un análisis.
    #[error("política de puntuación inválida: {0}")]
    InvalidPolicy(String),
}

/// Error de E/S del motor de reglas externo.
///
/// El adaptador lo captura siempre: un fallo del motor degrada esa fuente
/// a "cero problemas" en lugar de abortar la petición.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("fallo de E/S del motor de reglas: {0}")]
    Io(String),

    #[error("tiempo de espera agotado consultando el motor de reglas")]
    Timeout,
}
