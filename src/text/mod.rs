//! Segmentación de texto y estimación de legibilidad

pub mod segmenter;
pub mod syllables;

pub use segmenter::{segment, Segmentation, Span};
pub use syllables::{count_syllables, readability};
