pub mod tags;

use crate::types::entity::{Attributes, Catalog, CatalogId, Taggable};
use crate::types::scoring::{MatchResult, MatchSettings, Score};
use std::collections::HashSet;
use tracing::debug;

/// Rank `candidates` against the `source` attributes.
///
/// Each candidate earns `weight * overlap` points per category (medium,
/// genre, budget range, tag) and one reason for every category that
/// overlapped, always in that order. Zero-score candidates are dropped, the
/// rest are sorted by score descending with ties kept in input order, and
/// the list is cut to `settings.cap`.
pub fn score_matches<'a, T: Taggable>(
    source: &Attributes,
    candidates: &'a [T],
    catalog: &Catalog,
    settings: &MatchSettings,
) -> Vec<MatchResult<'a, T>> {
    let source_tags = tags::normalize_tags(&source.tags);
    if source.medium_ids.is_empty()
        && source.genre_ids.is_empty()
        && source.budget_range_ids.is_empty()
        && source_tags.is_empty()
    {
        debug!("source has no scoring attributes; skipping candidates");
        return Vec::new();
    }

    let mediums: HashSet<CatalogId> = source.medium_ids.iter().copied().collect();
    let genres: HashSet<CatalogId> = source.genre_ids.iter().copied().collect();
    let budgets: HashSet<CatalogId> = source.budget_range_ids.iter().copied().collect();
    let direction = settings.direction;
    let weights = settings.weights;

    let mut results: Vec<MatchResult<'a, T>> = candidates
        .iter()
        .filter_map(|candidate| {
            let attributes = candidate.attributes();
            let mut score: Score = 0;
            let mut reasons = Vec::new();

            let shared_mediums = overlap(&mediums, &attributes.medium_ids);
            if !shared_mediums.is_empty() {
                score = score.saturating_add(points(weights.medium, shared_mediums.len()));
                let names = join_names(&shared_mediums, |id| catalog.medium_name(id));
                reasons.push(direction.medium_reason(&names));
            }

            let shared_genres = overlap(&genres, &attributes.genre_ids);
            if !shared_genres.is_empty() {
                score = score.saturating_add(points(weights.genre, shared_genres.len()));
                let names = join_names(&shared_genres, |id| catalog.genre_name(id));
                reasons.push(direction.genre_reason(&names));
            }

            let shared_budgets = overlap(&budgets, &attributes.budget_range_ids);
            if !shared_budgets.is_empty() {
                score = score.saturating_add(points(weights.budget, shared_budgets.len()));
                reasons.push(direction.budget_reason().to_string());
            }

            let candidate_tags = tags::normalize_tags(&attributes.tags);
            let shared_tags: Vec<String> = source_tags
                .iter()
                .filter(|tag| candidate_tags.contains(tag))
                .cloned()
                .collect();
            if !shared_tags.is_empty() {
                score = score.saturating_add(points(weights.tag, shared_tags.len()));
                reasons.push(direction.tag_reason(&tags::render_tags(&shared_tags)));
            }

            (score > 0).then_some(MatchResult {
                candidate,
                score,
                reasons,
            })
        })
        .collect();

    // `sort_by` is stable: equal scores keep candidate order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(
        direction = direction.as_str(),
        candidates = candidates.len(),
        matched = results.len(),
        cap = settings.cap,
        "scored candidates"
    );
    results.truncate(settings.cap);
    results
}

/// Distinct candidate ids also present in `source`, in candidate order.
fn overlap(source: &HashSet<CatalogId>, candidate: &[CatalogId]) -> Vec<CatalogId> {
    let mut shared = Vec::new();
    for id in candidate {
        if source.contains(id) && !shared.contains(id) {
            shared.push(*id);
        }
    }
    shared
}

fn points(weight: Score, count: usize) -> Score {
    weight.saturating_mul(Score::try_from(count).unwrap_or(Score::MAX))
}

fn join_names<'c>(ids: &[CatalogId], lookup: impl Fn(CatalogId) -> Option<&'c str>) -> String {
    ids.iter()
        .map(|id| lookup(*id).map_or_else(|| id.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(", ")
}
