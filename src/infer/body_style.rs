//! Body style detection.
//!
//! The baseline paragraph style is the style signature covering the
//! most printed text. Weighting by summed character length rather
//! than fragment count favors styles that cover more of the page,
//! which correlates with body copy.

use std::collections::BTreeMap;

use crate::config::InferConfig;
use crate::model::{BodyStyle, StyleSignature, TextFragment};

/// Detect the dominant non-heading text style of a document.
///
/// Returns the synthetic fallback style when `fragments` is empty.
/// The result depends only on the multiset of fragments, not their
/// order.
pub fn detect_body_style(fragments: &[TextFragment], config: &InferConfig) -> BodyStyle {
    if fragments.is_empty() {
        return BodyStyle::fallback(config.default_body_size);
    }

    // BTreeMap keeps signature iteration deterministic so that ties
    // resolve the same way regardless of input order.
    let mut weights: BTreeMap<StyleSignature, u64> = BTreeMap::new();
    for fragment in fragments {
        *weights.entry(fragment.signature()).or_insert(0) += fragment.char_len() as u64;
    }

    let (mut winner, mut winner_weight) = (None::<StyleSignature>, 0u64);
    for (signature, weight) in &weights {
        if *weight > winner_weight {
            winner = Some(signature.clone());
            winner_weight = *weight;
        }
    }
    let winner = match winner {
        Some(signature) => signature,
        // Only reachable if every fragment has empty text.
        None => return BodyStyle::fallback(config.default_body_size),
    };

    // Bold body text is uncommon. If the winner is bold and a
    // non-bold sibling of the same size has substantial presence,
    // prefer the sibling.
    if winner.bold {
        let mut best_sibling: Option<(&StyleSignature, u64)> = None;
        for (signature, weight) in &weights {
            if !signature.bold && signature.size_key == winner.size_key {
                match best_sibling {
                    Some((_, best)) if *weight <= best => {}
                    _ => best_sibling = Some((signature, *weight)),
                }
            }
        }
        if let Some((sibling, weight)) = best_sibling {
            // Inclusive at exactly the configured ratio.
            if weight as f64 >= config.bold_override_ratio as f64 * winner_weight as f64 {
                log::debug!(
                    "body style: bold winner {:?} overridden by non-bold sibling {:?} ({}/{} chars)",
                    winner.font,
                    sibling.font,
                    weight,
                    winner_weight
                );
                return BodyStyle::from_signature(sibling);
            }
        }
    }

    BodyStyle::from_signature(&winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    fn fragment(text: &str, font: &str, size: f32, bold: bool) -> TextFragment {
        TextFragment {
            index: 0,
            page: 1,
            text: text.to_string(),
            font: font.to_string(),
            size,
            bold,
            italic: false,
            bbox: Rect::default(),
            relative_y: 0.5,
            leading_space: 0.0,
            word_count: text.split_whitespace().count(),
            is_all_caps: false,
            has_numbering: false,
            has_heading_keyword: false,
        }
    }

    #[test]
    fn test_empty_input_falls_back() {
        let body = detect_body_style(&[], &InferConfig::default());
        assert_eq!(body, BodyStyle::fallback(12.0));
    }

    #[test]
    fn test_char_weight_beats_fragment_count() {
        // Three short heading fragments vs one long body fragment.
        let fragments = vec![
            fragment("Intro", "Bold-Face", 18.0, true),
            fragment("Scope", "Bold-Face", 18.0, true),
            fragment("Goals", "Bold-Face", 18.0, true),
            fragment(
                "This paragraph carries far more printed text than all headings combined.",
                "Serif",
                10.0,
                false,
            ),
        ];
        let body = detect_body_style(&fragments, &InferConfig::default());
        assert_eq!(body.font, "Serif");
        assert_eq!(body.size, 10.0);
        assert!(!body.bold);
    }

    #[test]
    fn test_order_independence() {
        let mut fragments = vec![
            fragment("aaaa aaaa", "Serif", 10.0, false),
            fragment("bbbb", "Sans", 10.0, false),
            fragment("cccc cccc cc", "Serif", 10.0, false),
        ];
        let config = InferConfig::default();
        let forward = detect_body_style(&fragments, &config);
        fragments.reverse();
        let backward = detect_body_style(&fragments, &config);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_bold_override_applies() {
        // Bold winner with 40 chars, non-bold same-size sibling with 25.
        let fragments = vec![
            fragment(&"b".repeat(40), "Face", 11.0, true),
            fragment(&"r".repeat(25), "Face", 11.0, false),
        ];
        let body = detect_body_style(&fragments, &InferConfig::default());
        assert!(!body.bold);
    }

    #[test]
    fn test_bold_override_boundary_is_inclusive() {
        // Sibling weight exactly half the winner's.
        let fragments = vec![
            fragment(&"b".repeat(40), "Face", 11.0, true),
            fragment(&"r".repeat(20), "Face", 11.0, false),
        ];
        let body = detect_body_style(&fragments, &InferConfig::default());
        assert!(!body.bold);
    }

    #[test]
    fn test_bold_override_below_boundary() {
        let fragments = vec![
            fragment(&"b".repeat(40), "Face", 11.0, true),
            fragment(&"r".repeat(19), "Face", 11.0, false),
        ];
        let body = detect_body_style(&fragments, &InferConfig::default());
        assert!(body.bold);
    }

    #[test]
    fn test_bold_override_requires_same_size() {
        // The non-bold style is heavy but a different size.
        let fragments = vec![
            fragment(&"b".repeat(40), "Face", 11.0, true),
            fragment(&"r".repeat(30), "Face", 10.0, false),
        ];
        let body = detect_body_style(&fragments, &InferConfig::default());
        assert!(body.bold);
        assert_eq!(body.size, 11.0);
    }
}
