//! Segmentador de palabras y oraciones
//!
//! Función pura del texto de entrada: sin estado, totalmente reiniciable.

/// Rango semiabierto [start, end) en bytes sobre fronteras de carácter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Subcadena del texto original cubierta por este rango.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn contains(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Resultado de segmentar un texto.
#[derive(Debug, Clone)]
pub struct Segmentation {
    pub words: Vec<Span>,
    /// Siempre contiene al menos una oración.
    pub sentences: Vec<Span>,
}

/// Segmenta el texto en palabras y oraciones.
///
/// Palabras: secuencias maximales de caracteres alfanuméricos Unicode.
/// Oraciones: el texto partido por secuencias de `.`, `!` o `?`, con los
/// espacios circundantes recortados. Si no hay terminador, el texto
/// completo es la oración 1.
pub fn segment(text: &str) -> Segmentation {
    Segmentation {
        words: word_spans(text),
        sentences: sentence_spans(text),
    }
}

fn word_spans(text: &str) -> Vec<Span> {
    let mut words = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            if current.is_none() {
                current = Some(idx);
            }
        } else if let Some(start) = current.take() {
            words.push(Span::new(start, idx));
        }
    }
    if let Some(start) = current {
        words.push(Span::new(start, text.len()));
    }

    words
}

fn sentence_spans(text: &str) -> Vec<Span> {
    let mut sentences = Vec::new();
    let mut seg_start = 0usize;
    let mut in_terminator = false;

    for (idx, ch) in text.char_indices() {
        let is_terminator = matches!(ch, '.' | '!' | '?');
        if is_terminator && !in_terminator {
            if let Some(span) = trimmed(text, seg_start, idx) {
                sentences.push(span);
            }
            in_terminator = true;
        } else if !is_terminator && in_terminator {
            seg_start = idx;
            in_terminator = false;
        }
    }
    if !in_terminator {
        if let Some(span) = trimmed(text, seg_start, text.len()) {
            sentences.push(span);
        }
    }

    // Garantizar al menos una oración: hay divisiones aguas abajo
    // que usan el número de oraciones como denominador.
    if sentences.is_empty() {
        sentences.push(trimmed(text, 0, text.len()).unwrap_or(Span::new(0, 0)));
    }

    sentences
}

/// Recorta espacios en ambos extremos del rango; None si queda vacío.
fn trimmed(text: &str, start: usize, end: usize) -> Option<Span> {
    let slice = &text[start..end];
    let leading = slice.len() - slice.trim_start().len();
    let trailing = slice.len() - slice.trim_end().len();
    let (start, end) = (start + leading, end - trailing);
    (start < end).then_some(Span::new(start, end))
}
