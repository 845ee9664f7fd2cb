//! # strata
//!
//! Heuristic document outline inference for Rust.
//!
//! Given a flat list of typographically annotated text fragments from
//! a page-based document, strata infers a hierarchical outline: a
//! title plus H1/H2/H3 headings with page numbers. It exists for
//! indexing pipelines that need structural metadata from documents
//! lacking native structure tags.
//!
//! ## Quick Start
//!
//! ```no_run
//! use strata::{infer_outline, output, JsonFormat, TextFragment};
//!
//! fn main() -> strata::Result<()> {
//!     let fragments: Vec<TextFragment> = load_fragments();
//!
//!     let outline = infer_outline(&fragments);
//!     println!("{}", output::to_json(&outline, JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! # fn load_fragments() -> Vec<strata::TextFragment> { Vec::new() }
//! ```
//!
//! ## Pipeline
//!
//! - **Body style detection**: the dominant paragraph style, weighted
//!   by printed character coverage
//! - **Heading scoring**: a pure weighted sum of size, boldness,
//!   spacing, position, numbering, and keyword signals
//! - **Style clustering**: candidates grouped by (font, size, bold)
//!   signature; the top three clusters become H1/H2/H3
//! - **Assembly**: title selection from page-1 headings plus an
//!   ordered outline
//!
//! The pipeline never fails: degenerate inputs produce a structurally
//! valid, low-confidence record instead of an error. Batches of
//! documents are processed in parallel via [`batch::run_batch`].

pub mod batch;
pub mod config;
pub mod error;
pub mod infer;
pub mod model;
pub mod output;
pub mod source;

// Re-export commonly used types
pub use batch::{BatchJob, BatchSummary, JsonFileSink, MemorySink, OutlineSink};
pub use config::InferConfig;
pub use error::{Error, Result};
pub use infer::{ClusterStats, LeveledCandidate, ScoredFragment, StyleCluster};
pub use model::{
    BodyStyle, DocumentOutline, HeadingLevel, OutlineEntry, Rect, StyleSignature, TextFragment,
};
pub use output::JsonFormat;
pub use source::{FeatureExtractor, FragmentSource, JsonFragmentSource, RawFragment};

/// Infer a document outline with the default configuration.
///
/// # Example
///
/// ```
/// use strata::infer_outline;
///
/// let outline = infer_outline(&[]);
/// assert_eq!(outline.title, "Untitled Document");
/// assert!(outline.outline.is_empty());
/// ```
pub fn infer_outline(fragments: &[TextFragment]) -> DocumentOutline {
    infer::infer_outline(fragments, &InferConfig::default())
}

/// Infer a document outline with a custom configuration.
pub fn infer_outline_with_config(
    fragments: &[TextFragment],
    config: &InferConfig,
) -> DocumentOutline {
    infer::infer_outline(fragments, config)
}

/// Builder-style entry point for configuring and running inference.
///
/// # Example
///
/// ```no_run
/// use strata::Strata;
///
/// let outline = Strata::new()
///     .with_score_threshold(1.0)
///     .with_placeholder_title("No Title Found")
///     .infer(&[]);
/// ```
pub struct Strata {
    config: InferConfig,
}

impl Strata {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: InferConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: InferConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the heading-candidate acceptance threshold.
    pub fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.config = self.config.with_score_threshold(threshold);
        self
    }

    /// Set the placeholder title.
    pub fn with_placeholder_title(mut self, title: impl Into<String>) -> Self {
        self.config = self.config.with_placeholder_title(title);
        self
    }

    /// Access the effective configuration.
    pub fn config(&self) -> &InferConfig {
        &self.config
    }

    /// Run inference over a fragment list.
    pub fn infer(&self, fragments: &[TextFragment]) -> DocumentOutline {
        infer::infer_outline(fragments, &self.config)
    }

    /// Pull fragments from a source and run inference.
    pub fn infer_source(&self, source: &dyn FragmentSource) -> Result<DocumentOutline> {
        let fragments = source.fragments()?;
        Ok(infer::infer_outline(&fragments, &self.config))
    }
}

impl Default for Strata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_threshold() {
        let strata = Strata::new().with_score_threshold(2.5);
        assert_eq!(strata.config().score_threshold, 2.5);
    }

    #[test]
    fn test_builder_placeholder_title_flows_through() {
        let outline = Strata::new().with_placeholder_title("Nothing Here").infer(&[]);
        assert_eq!(outline.title, "Nothing Here");
    }

    #[test]
    fn test_empty_input_contract() {
        let outline = infer_outline(&[]);
        let json = output::to_json(&outline, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"title":"Untitled Document","outline":[]}"#);
    }
}
