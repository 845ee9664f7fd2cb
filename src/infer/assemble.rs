//! Title selection and outline assembly.

use std::cmp::Ordering;

use crate::config::InferConfig;
use crate::model::{DocumentOutline, HeadingLevel, OutlineEntry};

use super::cluster::LeveledCandidate;

/// Assemble the final output record from leveled candidates.
///
/// Title selection: the topmost H1 on page 1 (tie-break: highest
/// score, then lowest index) becomes the title when it sits within
/// the configured top region; otherwise the first H1 anywhere in
/// document order. The chosen candidate is removed from the outline
/// by its stable `index`, not by text, so a repeated heading with
/// identical text survives. With no H1 at all the title falls back
/// to the configured placeholder.
pub fn assemble_outline(
    candidates: &[LeveledCandidate<'_>],
    config: &InferConfig,
) -> DocumentOutline {
    let title_candidate = select_title(candidates, config);

    let title = match title_candidate {
        Some(candidate) => candidate.fragment.text.clone(),
        None => config.placeholder_title.clone(),
    };
    let title_index = title_candidate.map(|c| c.fragment.index);

    let mut remaining: Vec<&LeveledCandidate<'_>> = candidates
        .iter()
        .filter(|c| Some(c.fragment.index) != title_index)
        .collect();
    remaining.sort_by(|a, b| reading_order(a, b));

    let outline = remaining
        .iter()
        .map(|c| OutlineEntry::new(c.level, c.fragment.text.clone(), c.fragment.page))
        .collect();

    DocumentOutline { title, outline }
}

/// Reading order: page ascending, then vertical position, then the
/// stable fragment index.
fn reading_order(a: &LeveledCandidate<'_>, b: &LeveledCandidate<'_>) -> Ordering {
    a.fragment
        .page
        .cmp(&b.fragment.page)
        .then(a.fragment.relative_y.total_cmp(&b.fragment.relative_y))
        .then(a.fragment.index.cmp(&b.fragment.index))
}

fn select_title<'a, 'f>(
    candidates: &'a [LeveledCandidate<'f>],
    config: &InferConfig,
) -> Option<&'a LeveledCandidate<'f>> {
    let topmost_first_page = candidates
        .iter()
        .filter(|c| c.level == HeadingLevel::H1 && c.fragment.page == 1)
        .min_by(|a, b| {
            a.fragment
                .relative_y
                .total_cmp(&b.fragment.relative_y)
                .then(b.score.total_cmp(&a.score))
                .then(a.fragment.index.cmp(&b.fragment.index))
        });

    if let Some(candidate) = topmost_first_page {
        if candidate.fragment.relative_y <= config.title_region {
            return Some(candidate);
        }
    }

    // No H1 near the top of page 1: fall back to the first H1 in
    // document order.
    candidates
        .iter()
        .filter(|c| c.level == HeadingLevel::H1)
        .min_by(|a, b| reading_order(a, b))
}
