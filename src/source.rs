//! Fragment sources.
//!
//! The pipeline does not open documents itself. An upstream layout
//! walker produces raw fragment records (style and position metadata
//! per run of text); this module defines the seam the core consumes
//! them through, plus a JSON-dump reader for the common case of an
//! extractor that serializes its records.

use std::io::Read;

use regex::Regex;
use serde::Deserialize;

use crate::config::InferConfig;
use crate::error::{Error, Result};
use crate::model::{Rect, TextFragment};

/// A source of ordered text fragments for one document.
///
/// Implementations own whatever handle the upstream extractor needs;
/// the core only ever sees the normalized fragment records.
pub trait FragmentSource: Send + Sync {
    /// A stable identifier for the document (used in logs and to
    /// derive output names).
    fn document_id(&self) -> &str;

    /// Produce the document's fragments in reading order.
    fn fragments(&self) -> Result<Vec<TextFragment>>;
}

/// A fragment record as emitted by an upstream extractor, before
/// feature derivation. `index` is assigned on ingest from reading
/// order, never trusted from the dump.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFragment {
    /// 1-based page number
    pub page: u32,
    /// Text content (may carry surrounding whitespace)
    pub text: String,
    /// Font family name
    pub font: String,
    /// Font size in points
    pub size: f32,
    /// Bold flag
    #[serde(default)]
    pub bold: bool,
    /// Italic flag
    #[serde(default)]
    pub italic: bool,
    /// Bounding box in page coordinates
    #[serde(default)]
    pub bbox: Rect,
    /// Top edge normalized by page height
    #[serde(default)]
    pub relative_y: f32,
    /// Vertical gap above the fragment in points
    #[serde(default)]
    pub leading_space: f32,
}

/// Derives the text features the scorer consumes.
///
/// Compiled once per configuration; the keyword pattern is built from
/// the configured list with each word escaped.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    numbering: Regex,
    keywords: Option<Regex>,
}

impl FeatureExtractor {
    /// Build an extractor from the configured keyword list.
    pub fn new(config: &InferConfig) -> Self {
        // "1.", "2.1", "3.4.5 Title" and the like.
        let numbering = Regex::new(r"^\d+(\.\d+)*\.?(\s|$)").unwrap();

        let keywords = if config.heading_keywords.is_empty() {
            None
        } else {
            let escaped: Vec<String> = config
                .heading_keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect();
            let pattern = format!(r"(?i)\b({})\b", escaped.join("|"));
            Some(Regex::new(&pattern).unwrap())
        };

        Self {
            numbering,
            keywords,
        }
    }

    /// Convert raw records into fragments, trimming text, skipping
    /// empty runs, and assigning `index` from reading order.
    pub fn normalize(&self, raw: Vec<RawFragment>) -> Result<Vec<TextFragment>> {
        let mut fragments = Vec::with_capacity(raw.len());
        for record in raw {
            let text = record.text.trim();
            if text.is_empty() {
                continue;
            }
            if record.page == 0 {
                return Err(Error::InvalidFragment(format!(
                    "page numbers are 1-based, got 0 for {:?}",
                    text
                )));
            }

            fragments.push(TextFragment {
                index: fragments.len(),
                page: record.page,
                text: text.to_string(),
                font: record.font,
                size: record.size,
                bold: record.bold,
                italic: record.italic,
                bbox: record.bbox,
                relative_y: record.relative_y,
                leading_space: record.leading_space,
                word_count: text.split_whitespace().count(),
                is_all_caps: is_all_caps(text),
                has_numbering: self.numbering.is_match(text),
                has_heading_keyword: self
                    .keywords
                    .as_ref()
                    .is_some_and(|re| re.is_match(text)),
            });
        }
        Ok(fragments)
    }
}

fn is_all_caps(text: &str) -> bool {
    let mut saw_letter = false;
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        saw_letter = true;
    }
    saw_letter
}

/// A fragment source backed by a JSON dump of raw fragment records.
///
/// The dump is a JSON array of objects with the [`RawFragment`]
/// fields. Records are normalized eagerly at construction so that
/// `fragments()` cannot fail afterwards.
pub struct JsonFragmentSource {
    id: String,
    fragments: Vec<TextFragment>,
}

impl JsonFragmentSource {
    /// Read a fragment dump from any reader.
    pub fn from_reader<R: Read>(
        id: impl Into<String>,
        reader: R,
        extractor: &FeatureExtractor,
    ) -> Result<Self> {
        let raw: Vec<RawFragment> = serde_json::from_reader(reader)
            .map_err(|e| Error::InvalidFragment(e.to_string()))?;
        Ok(Self {
            id: id.into(),
            fragments: extractor.normalize(raw)?,
        })
    }

    /// Parse a fragment dump from a JSON string.
    pub fn from_json(
        id: impl Into<String>,
        json: &str,
        extractor: &FeatureExtractor,
    ) -> Result<Self> {
        Self::from_reader(id, json.as_bytes(), extractor)
    }
}

impl FragmentSource for JsonFragmentSource {
    fn document_id(&self) -> &str {
        &self.id
    }

    fn fragments(&self) -> Result<Vec<TextFragment>> {
        Ok(self.fragments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(&InferConfig::default())
    }

    fn raw(text: &str) -> RawFragment {
        RawFragment {
            page: 1,
            text: text.to_string(),
            font: "Serif".to_string(),
            size: 12.0,
            bold: false,
            italic: false,
            bbox: Rect::default(),
            relative_y: 0.5,
            leading_space: 0.0,
        }
    }

    #[test]
    fn test_numbering_patterns() {
        let ex = extractor();
        let features = |t: &str| ex.normalize(vec![raw(t)]).unwrap().remove(0);

        assert!(features("1. Introduction").has_numbering);
        assert!(features("2.1 Scope").has_numbering);
        assert!(features("3.4.5 Details").has_numbering);
        assert!(features("2.").has_numbering);
        assert!(!features("Version 2.1 released").has_numbering);
        assert!(!features("First things first").has_numbering);
    }

    #[test]
    fn test_keyword_matches_whole_words_only() {
        let ex = extractor();
        let features = |t: &str| ex.normalize(vec![raw(t)]).unwrap().remove(0);

        assert!(features("Introduction").has_heading_keyword);
        assert!(features("A Brief SUMMARY of results").has_heading_keyword);
        assert!(!features("Introductions to the team").has_heading_keyword);
        assert!(!features("Sectional sofas").has_heading_keyword);
    }

    #[test]
    fn test_empty_keyword_list_matches_nothing() {
        let config = InferConfig::default().with_keywords(vec![]);
        let ex = FeatureExtractor::new(&config);
        let frags = ex.normalize(vec![raw("Introduction")]).unwrap();
        assert!(!frags[0].has_heading_keyword);
    }

    #[test]
    fn test_all_caps_detection() {
        let ex = extractor();
        let features = |t: &str| ex.normalize(vec![raw(t)]).unwrap().remove(0);

        assert!(features("TABLE OF CONTENTS").is_all_caps);
        assert!(!features("Table of Contents").is_all_caps);
        assert!(!features("123 456").is_all_caps);
    }

    #[test]
    fn test_normalize_skips_empty_and_reindexes() {
        let ex = extractor();
        let frags = ex
            .normalize(vec![raw("First"), raw("   "), raw("Second")])
            .unwrap();
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].index, 0);
        assert_eq!(frags[1].index, 1);
        assert_eq!(frags[1].text, "Second");
    }

    #[test]
    fn test_normalize_rejects_zero_page() {
        let ex = extractor();
        let mut record = raw("Text");
        record.page = 0;
        assert!(ex.normalize(vec![record]).is_err());
    }

    #[test]
    fn test_json_source_roundtrip() {
        let json = r#"[
            {"page": 1, "text": "Big Title", "font": "Sans", "size": 24.0,
             "bold": true, "relative_y": 0.04, "leading_space": 0.0},
            {"page": 1, "text": "Body text here", "font": "Serif", "size": 11.0}
        ]"#;
        let source = JsonFragmentSource::from_json("doc-1", json, &extractor()).unwrap();
        assert_eq!(source.document_id(), "doc-1");

        let frags = source.fragments().unwrap();
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].text, "Big Title");
        assert!(frags[0].bold);
        assert_eq!(frags[1].size, 11.0);
    }

    #[test]
    fn test_json_source_rejects_malformed_dump() {
        let result = JsonFragmentSource::from_json("bad", "{not json", &extractor());
        assert!(matches!(result, Err(Error::InvalidFragment(_))));
    }
}
