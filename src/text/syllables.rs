//! Conteo heurístico de sílabas y fórmula de legibilidad

/// Cuenta sílabas de una palabra por grupos de vocales.
///
/// Heurística: minúsculas, solo letras; cada transición de no-vocal a
/// vocal (`a,e,i,o,u,y`) cuenta una sílaba; una `e` final muda resta una
/// si el conteo supera 1. Mínimo 1 para cualquier palabra con letras,
/// 0 si no quedan letras.
pub fn count_syllables(word: &str) -> usize {
    let clean: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect();

    if clean.is_empty() {
        return 0;
    }

    let mut syllables = 0usize;
    let mut previous_was_vowel = false;
    for ch in clean.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // Regla de la 'e' muda final.
    if clean.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

/// Facilidad de lectura estilo Flesch, acotada a [0, 100].
///
/// Las constantes son parte del contrato: se prueban contra sus valores
/// literales y no son ajustables por política.
pub fn readability(avg_words_per_sentence: f64, avg_syllables_per_word: f64) -> f64 {
    let score = 206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word;
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_vowel_group() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("strength"), 1);
    }

    #[test]
    fn test_vowel_transitions() {
        assert_eq!(count_syllables("happy"), 2);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("readability"), 5);
    }

    #[test]
    fn test_silent_e() {
        // "sentence": e-e-e => 3 grupos, la 'e' final resta una.
        assert_eq!(count_syllables("sentence"), 2);
        // Con un solo grupo la 'e' final no resta: mínimo 1.
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("are"), 1);
    }

    #[test]
    fn test_strips_non_letters() {
        assert_eq!(count_syllables("happy!"), 2);
        assert_eq!(count_syllables("it's"), 1);
        assert_eq!(count_syllables("42"), 0);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_syllables("HAPPY"), count_syllables("happy"));
    }

    #[test]
    fn test_readability_literal_constants() {
        // Valores literales de la fórmula, sin recorte.
        let score = readability(6.0, 1.5);
        assert!((score - (206.835 - 1.015 * 6.0 - 84.6 * 1.5)).abs() < 1e-9);
    }

    #[test]
    fn test_readability_clamped() {
        assert_eq!(readability(0.0, 0.0), 100.0);
        assert_eq!(readability(100.0, 3.0), 0.0);
    }
}
