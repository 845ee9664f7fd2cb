//! Inference configuration.
//!
//! Every heuristic constant used by the pipeline lives here so that
//! weight tuning never requires touching algorithm code. All weights
//! are additive contributions to the heading score; see
//! [`crate::infer::heading_score`] for how they combine.

/// Configuration for the outline inference pipeline.
#[derive(Debug, Clone)]
pub struct InferConfig {
    /// Weight applied to the capped font-size ratio above 1.0.
    pub size_weight: f32,

    /// Cap on the size ratio before weighting, to avoid outlier bias.
    pub size_ratio_cap: f32,

    /// Bonus for bold fragments that are also larger than body text.
    /// Bold at body size is not a heading signal.
    pub bold_bonus: f32,

    /// Bonus when the vertical gap above a fragment exceeds
    /// `leading_space_min` points.
    pub leading_space_bonus: f32,

    /// Minimum leading whitespace, in points, for the gap bonus.
    pub leading_space_min: f32,

    /// Penalty for lines longer than `long_line_words` words.
    pub long_line_penalty: f32,

    /// Word count above which the long-line penalty applies.
    pub long_line_words: usize,

    /// Bonus for fragments positioned in the top region of a page.
    pub top_position_bonus: f32,

    /// Fraction of page height counted as the top region, in (0, 1].
    pub top_region: f32,

    /// Bonus for a leading numeric-dotted pattern ("1.", "2.1").
    pub numbering_bonus: f32,

    /// Bonus for a whole-word heading keyword match.
    pub keyword_bonus: f32,

    /// Keywords that mark likely headings, matched as whole words,
    /// case-insensitive.
    pub heading_keywords: Vec<String>,

    /// Score above which a fragment becomes a heading candidate.
    pub score_threshold: f32,

    /// Maximum number of heading levels to assign. Fixed design
    /// ceiling of 3 (H1..H3); raising it past 3 has no effect on the
    /// serialized level names.
    pub max_levels: usize,

    /// A page-1 H1 with `relative_y` at or below this fraction
    /// qualifies as the document title.
    pub title_region: f32,

    /// Title used when no qualifying heading exists.
    pub placeholder_title: String,

    /// Body font size assumed when the document has no fragments.
    pub default_body_size: f32,

    /// A non-bold style of the same size as a bold body-style winner
    /// is preferred when its weight is at least this fraction of the
    /// winner's weight (inclusive).
    pub bold_override_ratio: f32,
}

impl InferConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading-candidate acceptance threshold.
    pub fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Replace the heading keyword list.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.heading_keywords = keywords;
        self
    }

    /// Set the placeholder title for documents without a detectable one.
    pub fn with_placeholder_title(mut self, title: impl Into<String>) -> Self {
        self.placeholder_title = title.into();
        self
    }

    /// Set the top-of-page region fraction used by both the scorer
    /// and the title selector.
    pub fn with_top_region(mut self, fraction: f32) -> Self {
        self.top_region = fraction;
        self.title_region = fraction;
        self
    }
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            size_weight: 2.0,
            size_ratio_cap: 2.0,
            bold_bonus: 0.8,
            leading_space_bonus: 1.0,
            leading_space_min: 10.0,
            long_line_penalty: 1.0,
            long_line_words: 15,
            top_position_bonus: 1.5,
            top_region: 0.2,
            numbering_bonus: 1.2,
            keyword_bonus: 1.0,
            heading_keywords: default_keywords(),
            score_threshold: 0.5,
            max_levels: 3,
            title_region: 0.2,
            placeholder_title: "Untitled Document".to_string(),
            default_body_size: 12.0,
            bold_override_ratio: 0.5,
        }
    }
}

fn default_keywords() -> Vec<String> {
    [
        "introduction",
        "summary",
        "abstract",
        "overview",
        "background",
        "section",
        "chapter",
        "contents",
        "methodology",
        "results",
        "discussion",
        "conclusion",
        "references",
        "appendix",
        "acknowledgements",
        "glossary",
        "index",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = InferConfig::default();
        assert_eq!(config.size_weight, 2.0);
        assert_eq!(config.score_threshold, 0.5);
        assert_eq!(config.max_levels, 3);
        assert_eq!(config.placeholder_title, "Untitled Document");
        assert!(config.heading_keywords.contains(&"introduction".to_string()));
    }

    #[test]
    fn test_config_builder() {
        let config = InferConfig::new()
            .with_score_threshold(1.5)
            .with_placeholder_title("No Title")
            .with_top_region(0.25);

        assert_eq!(config.score_threshold, 1.5);
        assert_eq!(config.placeholder_title, "No Title");
        assert_eq!(config.top_region, 0.25);
        assert_eq!(config.title_region, 0.25);
    }
}
