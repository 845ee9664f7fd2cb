//! Style clustering and heading-level assignment.
//!
//! Levels are assigned per style cluster, never per fragment, in one
//! global whole-document pass: the H1 cluster is the single most
//! heading-like style in the entire document, so level meaning stays
//! consistent across pages.

use std::collections::BTreeMap;

use crate::config::InferConfig;
use crate::model::{HeadingLevel, StyleSignature, TextFragment};

use super::score::ScoredFragment;

/// Aggregate score statistics for a style cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterStats {
    /// Mean score of the members
    pub mean: f32,
    /// Median score of the members
    pub median: f32,
    /// Population standard deviation (0 for a single member)
    pub std_dev: f32,
    /// Number of members
    pub population: usize,
}

/// All heading candidates sharing one style signature.
#[derive(Debug, Clone)]
pub struct StyleCluster<'a> {
    /// The shared style signature
    pub signature: StyleSignature,
    /// Member candidates
    pub members: Vec<ScoredFragment<'a>>,
    /// Aggregate statistics
    pub stats: ClusterStats,
}

/// A heading candidate with its assigned level.
#[derive(Debug, Clone)]
pub struct LeveledCandidate<'a> {
    /// The underlying fragment
    pub fragment: &'a TextFragment,
    /// Heading score
    pub score: f32,
    /// Assigned level
    pub level: HeadingLevel,
}

/// Group scored fragments above the acceptance threshold into style
/// clusters, ranked most-heading-like first.
pub fn build_clusters<'a>(
    scored: &[ScoredFragment<'a>],
    config: &InferConfig,
) -> Vec<StyleCluster<'a>> {
    let mut groups: BTreeMap<StyleSignature, Vec<ScoredFragment<'a>>> = BTreeMap::new();
    for candidate in scored {
        if candidate.score > config.score_threshold {
            groups
                .entry(candidate.fragment.signature())
                .or_default()
                .push(candidate.clone());
        }
    }

    let mut clusters: Vec<StyleCluster<'a>> = groups
        .into_iter()
        .map(|(signature, members)| {
            let stats = compute_stats(&members);
            StyleCluster {
                signature,
                members,
                stats,
            }
        })
        .collect();

    // Font size dominates: larger type is the strongest visual
    // heading signal. Mean score and boldness break ties among
    // same-size clusters.
    clusters.sort_by(|a, b| {
        b.signature
            .size_key
            .cmp(&a.signature.size_key)
            .then(b.stats.mean.total_cmp(&a.stats.mean))
            .then(b.signature.bold.cmp(&a.signature.bold))
            .then(a.signature.cmp(&b.signature))
    });

    clusters
}

/// Assign H1..H3 to the top-ranked clusters and return the leveled
/// candidates. Candidates in lower-ranked clusters are dropped.
///
/// This is a value-returning transformation: input fragments are
/// never mutated, so re-running it on identical input is idempotent.
pub fn assign_levels<'a>(
    scored: &[ScoredFragment<'a>],
    config: &InferConfig,
) -> Vec<LeveledCandidate<'a>> {
    let clusters = build_clusters(scored, config);

    let level_cap = config.max_levels.min(3);
    let mut leveled = Vec::new();
    for (rank, cluster) in clusters.iter().take(level_cap).enumerate() {
        let level = match HeadingLevel::from_rank(rank) {
            Some(level) => level,
            None => break,
        };
        log::debug!(
            "cluster {} -> {}: {} member(s), mean {:.2}, median {:.2}, stddev {:.2}",
            cluster.signature.font,
            level,
            cluster.stats.population,
            cluster.stats.mean,
            cluster.stats.median,
            cluster.stats.std_dev,
        );
        for member in &cluster.members {
            leveled.push(LeveledCandidate {
                fragment: member.fragment,
                score: member.score,
                level,
            });
        }
    }

    leveled
}

fn compute_stats(members: &[ScoredFragment<'_>]) -> ClusterStats {
    let population = members.len();
    debug_assert!(population > 0, "clusters are built from non-empty groups");

    let mut scores: Vec<f32> = members.iter().map(|m| m.score).collect();
    scores.sort_by(f32::total_cmp);

    let mean = scores.iter().sum::<f32>() / population as f32;

    let median = if population % 2 == 1 {
        scores[population / 2]
    } else {
        (scores[population / 2 - 1] + scores[population / 2]) / 2.0
    };

    // Population variance; a single member yields 0 by definition.
    let variance = scores
        .iter()
        .map(|s| {
            let d = s - mean;
            d * d
        })
        .sum::<f32>()
        / population as f32;

    ClusterStats {
        mean,
        median,
        std_dev: variance.sqrt(),
        population,
    }
}
