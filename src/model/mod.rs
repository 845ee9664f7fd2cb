//! Data model for outline inference.
//!
//! Fragments are the input side of the pipeline: styled runs of text
//! with position metadata, as produced by an upstream layout walker.
//! Outlines are the output side: the inferred title plus ordered
//! heading entries. Everything here is a derived, read-only artifact
//! scoped to a single document.

mod fragment;
mod outline;

pub use fragment::{BodyStyle, Rect, StyleSignature, TextFragment};
pub use outline::{DocumentOutline, HeadingLevel, OutlineEntry};
