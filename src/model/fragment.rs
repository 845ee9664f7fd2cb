//! Text fragment and style types.

use serde::{Deserialize, Serialize};

/// A rectangle in page coordinates (points, origin at top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// One styled run of text with position and style metadata.
///
/// Fragments are immutable once created. The `index` field reflects
/// stable document-reading order and is the tie-break key everywhere
/// two fragments compare equal on position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// Stable ordinal within the document
    pub index: usize,

    /// 1-based page number
    pub page: u32,

    /// Non-empty trimmed text content
    pub text: String,

    /// Font family name (opaque)
    pub font: String,

    /// Font size in points
    pub size: f32,

    /// Whether the font is bold
    pub bold: bool,

    /// Whether the font is italic
    pub italic: bool,

    /// Bounding box in page coordinates
    pub bbox: Rect,

    /// Top edge normalized by page height, in [0, 1); 0 = top
    pub relative_y: f32,

    /// Vertical gap in points above this fragment (0 if first on page)
    pub leading_space: f32,

    /// Number of whitespace-separated words in `text`
    pub word_count: usize,

    /// Whether every letter in `text` is uppercase
    pub is_all_caps: bool,

    /// Whether `text` starts with a numeric-dotted pattern ("2.1")
    pub has_numbering: bool,

    /// Whether `text` contains a whole-word heading keyword
    pub has_heading_keyword: bool,
}

impl TextFragment {
    /// Get this fragment's style signature.
    pub fn signature(&self) -> StyleSignature {
        StyleSignature::new(&self.font, self.size, self.bold)
    }

    /// Character length of the text, the weight unit for body-style
    /// detection.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Grouping key for style clustering: font, size rounded to one
/// decimal, and boldness. Italic is deliberately not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleSignature {
    /// Font family name
    pub font: String,
    /// Font size in tenths of a point (12.34pt -> 123)
    pub size_key: i32,
    /// Boldness flag
    pub bold: bool,
}

impl StyleSignature {
    /// Create a signature from raw style attributes.
    pub fn new(font: &str, size: f32, bold: bool) -> Self {
        Self {
            font: font.to_string(),
            size_key: (size * 10.0).round() as i32,
            bold,
        }
    }

    /// The rounded font size in points.
    pub fn size(&self) -> f32 {
        self.size_key as f32 / 10.0
    }
}

/// The inferred baseline paragraph style of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    /// Font family name (empty for the synthetic default)
    pub font: String,
    /// Font size in points, always > 0
    pub size: f32,
    /// Boldness flag
    pub bold: bool,
}

impl BodyStyle {
    /// Create a body style from a signature.
    pub fn from_signature(signature: &StyleSignature) -> Self {
        Self {
            font: signature.font.clone(),
            size: signature.size(),
            bold: signature.bold,
        }
    }

    /// The synthetic default used when a document has no fragments.
    pub fn fallback(size: f32) -> Self {
        Self {
            font: String::new(),
            size,
            bold: false,
        }
    }
}
