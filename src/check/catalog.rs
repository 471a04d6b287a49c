use crate::types::report::Finding;
use crate::workspace::Workspace;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// One blocking finding per table that repeats an id.
pub fn duplicate_id_findings(workspace: &Workspace) -> Vec<Finding> {
    let catalog = &workspace.catalog;
    [
        (
            "mediums",
            duplicates(catalog.mediums.iter().map(|entry| entry.id)),
        ),
        (
            "genres",
            duplicates(catalog.genres.iter().map(|entry| entry.id)),
        ),
        (
            "budget_ranges",
            duplicates(catalog.budget_ranges.iter().map(|range| range.id)),
        ),
        (
            "contacts",
            duplicates(workspace.contacts.iter().map(|contact| contact.id.as_str())),
        ),
        (
            "projects",
            duplicates(workspace.projects.iter().map(|project| project.id.as_str())),
        ),
    ]
    .into_iter()
    .filter(|(_, repeated)| !repeated.is_empty())
    .map(|(table, repeated)| Finding {
        id: "catalog.duplicate_id".to_string(),
        title: format!("Duplicate ids in {table}"),
        body: format!(
            "{table} repeats id(s) {}; lookups will only see the first entry.",
            repeated.join(", ")
        ),
        blocking: true,
    })
    .collect()
}

fn duplicates<I, K>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Display,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut repeated = Vec::new();
    for id in ids {
        let label = id.to_string();
        if !seen.insert(id) && reported.insert(label.clone()) {
            repeated.push(label);
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_reports_each_repeated_id_once() {
        assert_eq!(duplicates([1, 2, 1, 3, 1, 2]), vec!["1", "2"]);
        assert!(duplicates(["a", "b"]).is_empty());
    }
}
