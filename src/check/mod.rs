pub mod attributes;
pub mod catalog;

use crate::types::report::Finding;
use crate::workspace::Workspace;

/// Data problems in a snapshot that degrade matching, blocking ones first.
pub fn check_workspace(workspace: &Workspace) -> Vec<Finding> {
    let mut findings = catalog::duplicate_id_findings(workspace);
    for contact in &workspace.contacts {
        findings.extend(attributes::entity_findings(
            "contact",
            contact,
            &workspace.catalog,
        ));
    }
    for project in &workspace.projects {
        findings.extend(attributes::entity_findings(
            "project",
            project,
            &workspace.catalog,
        ));
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(json: &str) -> Workspace {
        serde_json::from_str(json).expect("snapshot should parse")
    }

    const CLEAN: &str = r#"
{
  "workspace_id": "ws-1",
  "mediums": [{"id": 1, "name": "Film"}, {"id": 2, "name": "TV"}],
  "genres": [{"id": 9, "name": "Thriller"}],
  "budget_ranges": [{"id": 5, "medium_id": 1, "label": "$1M-$5M"}],
  "contacts": [{"id": "c1", "name": "Ada", "medium_ids": [1], "budget_range_ids": [5]}],
  "projects": [{"id": "p1", "title": "Night Shift", "genre_ids": [9], "tags": ["noir"]}]
}
"#;

    #[test]
    fn clean_snapshot_has_no_findings() {
        assert!(check_workspace(&workspace(CLEAN)).is_empty());
    }

    #[test]
    fn duplicate_ids_are_blocking() {
        let findings = check_workspace(&workspace(
            r#"
{
  "workspace_id": "ws-1",
  "mediums": [{"id": 1, "name": "Film"}, {"id": 1, "name": "Movies"}],
  "contacts": [
    {"id": "c1", "name": "Ada", "medium_ids": [1]},
    {"id": "c1", "name": "Ada again", "medium_ids": [1]}
  ]
}
"#,
        ));

        let duplicates: Vec<&Finding> = findings
            .iter()
            .filter(|finding| finding.id == "catalog.duplicate_id")
            .collect();
        assert_eq!(duplicates.len(), 2);
        assert!(duplicates.iter().all(|finding| finding.blocking));
        assert!(duplicates[0].title.contains("mediums"));
        assert!(duplicates[1].title.contains("contacts"));
    }

    #[test]
    fn unknown_ids_and_mismatched_budgets_warn() {
        let findings = check_workspace(&workspace(
            r#"
{
  "workspace_id": "ws-1",
  "mediums": [{"id": 1, "name": "Film"}, {"id": 2, "name": "TV"}],
  "budget_ranges": [{"id": 5, "medium_id": 1, "label": "$1M-$5M"}],
  "projects": [
    {"id": "p1", "title": "Pilot", "medium_ids": [2, 7], "genre_ids": [3], "budget_range_ids": [5, 6]}
  ]
}
"#,
        ));

        let ids: Vec<&str> = findings.iter().map(|finding| finding.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "attributes.unknown_medium",
                "attributes.unknown_genre",
                "attributes.unknown_budget_range",
                "budget.medium_mismatch",
            ]
        );
        assert!(findings.iter().all(|finding| !finding.blocking));
        assert!(findings[0].body.contains("7"));
        assert!(findings[3].body.contains("$1M-$5M"));
    }

    #[test]
    fn blank_tags_and_empty_entities_warn() {
        let findings = check_workspace(&workspace(
            r##"
{
  "workspace_id": "ws-1",
  "contacts": [{"id": "c1", "name": "Ada", "tags": [" ", "#"]}]
}
"##,
        ));

        assert!(findings
            .iter()
            .any(|finding| finding.id == "tags.blank" && finding.body.contains("2 blank")));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "attributes.empty"));
    }
}
