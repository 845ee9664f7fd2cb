//! The structural inference pipeline.
//!
//! Four sequential stages transform a flat fragment list into a title
//! and outline: body-style detection, per-fragment scoring, style
//! clustering with level assignment, and title/outline assembly.
//! Every stage is a pure read-only transformation; no state survives
//! across documents.

mod assemble;
mod body_style;
mod cluster;
mod score;

pub use assemble::assemble_outline;
pub use body_style::detect_body_style;
pub use cluster::{assign_levels, build_clusters, ClusterStats, LeveledCandidate, StyleCluster};
pub use score::{heading_score, score_fragments, ScoredFragment};

use crate::config::InferConfig;
use crate::model::{DocumentOutline, TextFragment};

/// Run the full inference pipeline over one document's fragments.
///
/// Never fails: an empty fragment list yields the placeholder title
/// and an empty outline.
pub fn infer_outline(fragments: &[TextFragment], config: &InferConfig) -> DocumentOutline {
    if fragments.is_empty() {
        log::debug!("no fragments, emitting placeholder outline");
        return DocumentOutline::empty(config.placeholder_title.clone());
    }

    let body = detect_body_style(fragments, config);
    log::debug!(
        "body style: font={:?} size={} bold={}",
        body.font,
        body.size,
        body.bold
    );

    let scored = score_fragments(fragments, body.size, config);
    let candidate_count = scored
        .iter()
        .filter(|s| s.score > config.score_threshold)
        .count();
    log::debug!(
        "scored {} fragments, {} above threshold {}",
        scored.len(),
        candidate_count,
        config.score_threshold
    );

    let leveled = assign_levels(&scored, config);
    log::debug!("{} candidates assigned heading levels", leveled.len());

    let outline = assemble_outline(&leveled, config);
    log::debug!(
        "title={:?}, {} outline entries",
        outline.title,
        outline.outline.len()
    );

    outline
}
