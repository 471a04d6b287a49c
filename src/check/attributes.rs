use crate::matching::tags::normalize_tag;
use crate::types::entity::{Catalog, CatalogId, Taggable};
use crate::types::report::Finding;

/// Warnings for data on one entity that the scorer silently ignores or
/// cannot name.
pub fn entity_findings<T: Taggable>(kind: &str, entity: &T, catalog: &Catalog) -> Vec<Finding> {
    let attributes = entity.attributes();
    let label = format!("{kind} '{}' ({})", entity.display_name(), entity.id());
    let mut findings = Vec::new();

    let unknown_mediums = unknown(&attributes.medium_ids, |id| {
        catalog.medium_name(id).is_some()
    });
    if !unknown_mediums.is_empty() {
        findings.push(warning(
            "attributes.unknown_medium",
            "Unknown medium ids",
            format!("{label} references medium id(s) {unknown_mediums} missing from the catalog."),
        ));
    }

    let unknown_genres = unknown(&attributes.genre_ids, |id| catalog.genre_name(id).is_some());
    if !unknown_genres.is_empty() {
        findings.push(warning(
            "attributes.unknown_genre",
            "Unknown genre ids",
            format!("{label} references genre id(s) {unknown_genres} missing from the catalog."),
        ));
    }

    let unknown_budgets = unknown(&attributes.budget_range_ids, |id| {
        catalog.budget_range(id).is_some()
    });
    if !unknown_budgets.is_empty() {
        findings.push(warning(
            "attributes.unknown_budget_range",
            "Unknown budget range ids",
            format!(
                "{label} references budget range id(s) {unknown_budgets} missing from the catalog."
            ),
        ));
    }

    let mismatched = attributes
        .budget_range_ids
        .iter()
        .filter_map(|id| catalog.budget_range(*id))
        .filter(|range| !attributes.medium_ids.contains(&range.medium_id))
        .map(|range| range.label.as_str())
        .collect::<Vec<_>>();
    if !mismatched.is_empty() {
        findings.push(warning(
            "budget.medium_mismatch",
            "Budget range outside selected mediums",
            format!(
                "{label} selects budget range(s) {} whose medium is not selected.",
                mismatched.join(", ")
            ),
        ));
    }

    let blank_tags = attributes
        .tags
        .iter()
        .filter(|tag| normalize_tag(tag).is_none())
        .count();
    if blank_tags > 0 {
        findings.push(warning(
            "tags.blank",
            "Blank tags",
            format!("{label} has {blank_tags} blank tag(s) that never match."),
        ));
    }

    let has_tags = blank_tags < attributes.tags.len();
    if attributes.medium_ids.is_empty()
        && attributes.genre_ids.is_empty()
        && attributes.budget_range_ids.is_empty()
        && !has_tags
    {
        findings.push(warning(
            "attributes.empty",
            "No scoring attributes",
            format!("{label} has no mediums, genres, budget ranges or tags and can never match."),
        ));
    }

    findings
}

fn unknown(ids: &[CatalogId], known: impl Fn(CatalogId) -> bool) -> String {
    let mut missing: Vec<CatalogId> = Vec::new();
    for id in ids.iter().copied().filter(|id| !known(*id)) {
        if !missing.contains(&id) {
            missing.push(id);
        }
    }
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn warning(id: &str, title: &str, body: String) -> Finding {
    Finding {
        id: id.to_string(),
        title: title.to_string(),
        body,
        blocking: false,
    }
}
