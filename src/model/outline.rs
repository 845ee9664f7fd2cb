//! Outline output types.
//!
//! `DocumentOutline` is the per-document output record. Its field
//! order (title first, then outline) and the `level`/`text`/`page`
//! key names are part of the contract for downstream consumers; the
//! serde derives rely on declaration order to preserve it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading level of an outline entry.
///
/// At most three levels are ever produced; this is a fixed design
/// ceiling, not data-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Level for a cluster rank (0 = most heading-like), if within
    /// the three-level ceiling.
    pub fn from_rank(rank: usize) -> Option<Self> {
        match rank {
            0 => Some(HeadingLevel::H1),
            1 => Some(HeadingLevel::H2),
            2 => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        };
        write!(f, "{}", s)
    }
}

/// A single entry of the inferred outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,

    /// Heading text
    pub text: String,

    /// 1-based page number
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The inferred structure of one document: a title plus an ordered
/// outline. The title is not duplicated inside the outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title (placeholder if none was detected)
    pub title: String,

    /// Ordered outline entries
    pub outline: Vec<OutlineEntry>,
}

impl DocumentOutline {
    /// Create an outline with a title and no entries.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Check if the outline has no entries.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Number of outline entries.
    pub fn len(&self) -> usize {
        self.outline.len()
    }
}
