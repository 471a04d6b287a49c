use crate::error::{ReelmatchError, Result};
use crate::types::entity::{Catalog, Contact, Project};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// A snapshot of one workspace's scoring data.
#[derive(Debug, Clone, Deserialize)]
pub struct Workspace {
    pub workspace_id: String,
    #[serde(flatten)]
    pub catalog: Catalog,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Workspace {
    pub fn contact(&self, id: &str) -> Result<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.id == id)
            .ok_or_else(|| ReelmatchError::EntityNotFound {
                kind: "contact",
                id: id.to_string(),
            })
    }

    pub fn project(&self, id: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|project| project.id == id)
            .ok_or_else(|| ReelmatchError::EntityNotFound {
                kind: "project",
                id: id.to_string(),
            })
    }
}

pub fn load_workspace(path: &Path) -> Result<Workspace> {
    if !path.is_file() {
        return Err(ReelmatchError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let workspace: Workspace = serde_json::from_str(&content)?;
    info!(
        workspace = %workspace.workspace_id,
        contacts = workspace.contacts.len(),
        projects = workspace.projects.len(),
        "loaded workspace snapshot"
    );
    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r##"
{
  "workspace_id": "ws-1",
  "mediums": [{"id": 1, "name": "Film"}],
  "genres": [{"id": 9, "name": "Thriller"}],
  "budget_ranges": [{"id": 2, "medium_id": 1, "label": "$1M-$5M"}],
  "contacts": [
    {"id": "c1", "name": "Ada", "company": "North Pictures", "medium_ids": [1], "tags": ["#noir"]}
  ],
  "projects": [
    {"id": "p1", "title": "Night Shift", "genre_ids": [9]}
  ]
}
"##;

    #[test]
    fn load_workspace_parses_snapshot() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("workspace.json");
        fs::write(&path, SNAPSHOT).expect("snapshot should write");

        let workspace = load_workspace(&path).expect("snapshot should load");
        assert_eq!(workspace.workspace_id, "ws-1");
        assert_eq!(workspace.catalog.medium_name(1), Some("Film"));
        assert_eq!(workspace.catalog.budget_ranges.len(), 1);
        assert_eq!(workspace.contact("c1").expect("contact exists").name, "Ada");
        assert_eq!(
            workspace.project("p1").expect("project exists").attributes.genre_ids,
            vec![9]
        );
    }

    #[test]
    fn lookup_reports_missing_entity() {
        let workspace: Workspace =
            serde_json::from_str(SNAPSHOT).expect("snapshot should parse");
        let err = workspace.project("nope").expect_err("lookup should fail");
        assert_eq!(err.to_string(), "project not found in workspace: nope");
    }

    #[test]
    fn load_workspace_rejects_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_workspace(&dir.path().join("missing.json")).expect_err("load should fail");
        assert!(matches!(err, ReelmatchError::PathNotFound(_)));
    }

    #[test]
    fn load_workspace_surfaces_json_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("workspace.json");
        fs::write(&path, "{ not json").expect("snapshot should write");
        let err = load_workspace(&path).expect_err("load should fail");
        assert!(matches!(err, ReelmatchError::Json(_)));
    }
}
