use crate::error::{ReelmatchError, Result};
use crate::types::report::MatchReport;
use crate::types::scoring::{Direction, Score};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct TalkingPoint {
    pub contact_id: String,
    pub project_id: String,
    pub score: Score,
}

/// Suggested contact/project links, ready to be created as talking points.
#[derive(Debug, Clone, Serialize)]
pub struct LinkPlan {
    pub version: String,
    pub generated_at: String,
    pub workspace_id: String,
    pub links: Vec<TalkingPoint>,
}

impl LinkPlan {
    pub fn from_report(report: &MatchReport) -> Self {
        let links = report
            .matches
            .iter()
            .map(|entry| {
                let (contact_id, project_id) = match report.direction {
                    Direction::ProjectsForContact => (report.source.id.clone(), entry.id.clone()),
                    Direction::ContactsForProject => (entry.id.clone(), report.source.id.clone()),
                };
                TalkingPoint {
                    contact_id,
                    project_id,
                    score: entry.score,
                }
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            workspace_id: report.workspace_id.clone(),
            links,
        }
    }
}

pub fn write_plan(root: &Path, output_dir: &str, plan: &LinkPlan) -> Result<PathBuf> {
    let dir = root.join(output_dir);
    fs::create_dir_all(&dir).map_err(ReelmatchError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let out_path = dir.join(format!("links-{stamp}.json"));
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(&out_path, json).map_err(ReelmatchError::Io)?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{EntityRef, MatchEntry};
    use tempfile::TempDir;

    fn report(direction: Direction) -> MatchReport {
        MatchReport {
            workspace_id: "ws-1".to_string(),
            direction,
            source: EntityRef {
                id: "src".to_string(),
                name: "Source".to_string(),
            },
            cap: 5,
            matches: vec![MatchEntry {
                id: "hit".to_string(),
                name: "Hit".to_string(),
                score: 4,
                reasons: vec!["Works with matching budget ranges".to_string()],
            }],
        }
    }

    #[test]
    fn links_pair_contact_and_project_for_both_directions() {
        let plan = LinkPlan::from_report(&report(Direction::ProjectsForContact));
        assert_eq!(plan.links[0].contact_id, "src");
        assert_eq!(plan.links[0].project_id, "hit");

        let plan = LinkPlan::from_report(&report(Direction::ContactsForProject));
        assert_eq!(plan.links[0].contact_id, "hit");
        assert_eq!(plan.links[0].project_id, "src");
        assert_eq!(plan.links[0].score, 4);
    }

    #[test]
    fn write_plan_creates_timestamped_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let plan = LinkPlan::from_report(&report(Direction::ProjectsForContact));

        let path = write_plan(dir.path(), ".reelmatch/links", &plan).expect("plan should write");

        assert!(path.starts_with(dir.path().join(".reelmatch/links")));
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("file name should be utf-8");
        assert!(file_name.starts_with("links-") && file_name.ends_with(".json"));

        let written = fs::read_to_string(&path).expect("plan should read back");
        let value: serde_json::Value = serde_json::from_str(&written).expect("plan is json");
        assert_eq!(value["workspace_id"], "ws-1");
        assert_eq!(value["links"][0]["project_id"], "hit");
    }
}
