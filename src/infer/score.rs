//! Heading-likelihood scoring.
//!
//! The scorer is a pure weighted sum of independent typographic
//! signals relative to the detected body size. Scores are only
//! meaningful as relative ranks within one document; there is no
//! normalization.

use crate::config::InferConfig;
use crate::model::TextFragment;

/// A fragment with its computed heading score attached.
#[derive(Debug, Clone)]
pub struct ScoredFragment<'a> {
    /// The underlying fragment
    pub fragment: &'a TextFragment,
    /// Heading-likelihood score (may be negative due to penalties)
    pub score: f32,
}

/// Compute the heading score for one fragment.
///
/// Order-independent and free of shared state; invoked once per
/// fragment. `body_size` at or below zero disables the size signal
/// (ratio treated as 1.0).
pub fn heading_score(fragment: &TextFragment, body_size: f32, config: &InferConfig) -> f32 {
    let mut score = 0.0;

    let size_ratio = if body_size > 0.0 {
        fragment.size / body_size
    } else {
        1.0
    };

    // Proportional size signal, capped to avoid outlier bias.
    if size_ratio > 1.0 {
        let capped = size_ratio.min(config.size_ratio_cap);
        score += config.size_weight * (capped - 1.0);
    }

    // Bold only counts when the fragment is also larger than body
    // text; bold at body size is emphasis, not a heading.
    if fragment.bold && size_ratio > 1.0 {
        score += config.bold_bonus;
    }

    if fragment.leading_space > config.leading_space_min {
        score += config.leading_space_bonus;
    }

    if fragment.word_count > config.long_line_words {
        score -= config.long_line_penalty;
    }

    if (0.0..config.top_region).contains(&fragment.relative_y) {
        score += config.top_position_bonus;
    }

    if fragment.has_numbering {
        score += config.numbering_bonus;
    }

    if fragment.has_heading_keyword {
        score += config.keyword_bonus;
    }

    score
}

/// Score every fragment against the body size.
pub fn score_fragments<'a>(
    fragments: &'a [TextFragment],
    body_size: f32,
    config: &InferConfig,
) -> Vec<ScoredFragment<'a>> {
    fragments
        .iter()
        .map(|fragment| ScoredFragment {
            fragment,
            score: heading_score(fragment, body_size, config),
        })
        .collect()
}
