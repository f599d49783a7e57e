//! Aplicador de correcciones
//!
//! Convierte el texto original en texto corregido usando la lista de
//! problemas resueltos. Total sobre cualquier conjunto de entrada: las
//! correcciones inaplicables se omiten y se registran, nunca abortan.

use tracing::warn;

use crate::report::TextIssue;

/// Aplica los reemplazos sugeridos sobre una copia del texto.
///
/// Se procesa en orden DESCENDENTE de `start`: aplicando primero los
/// reemplazos de mayor offset, los rangos pendientes (todos anteriores)
/// siguen siendo válidos sobre el texto original, porque un reemplazo
/// nunca toca texto anterior a su propio inicio. En orden ascendente, el
/// primer reemplazo de longitud distinta invalidaría todos los offsets
/// posteriores.
pub fn apply(text: &str, resolved: &[TextIssue]) -> String {
    let mut applicable: Vec<&TextIssue> = resolved
        .iter()
        .filter(|issue| issue.has_replacement() && issue.start <= issue.end && issue.end <= text.len())
        .collect();
    applicable.sort_by(|a, b| b.start.cmp(&a.start));

    let mut corrected = text.to_string();
    for issue in applicable {
        // El búfer solo puede haberse encogido por la derecha; un rango
        // que ya no cabe (o cae fuera de frontera) se omite.
        let fits = issue.end <= corrected.len()
            && corrected.is_char_boundary(issue.start)
            && corrected.is_char_boundary(issue.end);
        if !fits {
            warn!(
                start = issue.start,
                end = issue.end,
                "se omite corrección no aplicable"
            );
            continue;
        }
        let replacement = issue.suggested_replacement.as_deref().unwrap_or_default();
        corrected.replace_range(issue.start..issue.end, replacement);
    }

    corrected
}
