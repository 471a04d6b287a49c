use crate::types::report::MatchReport;
use crate::types::scoring::Direction;

pub fn to_markdown(report: &MatchReport) -> String {
    let heading = match report.direction {
        Direction::ProjectsForContact => "Suggested projects for",
        Direction::ContactsForProject => "Suggested contacts for",
    };

    let mut output = String::new();
    output.push_str(&format!("# {} {}\n\n", heading, report.source.name));
    output.push_str(&format!(
        "Workspace: {} (showing up to {})\n\n",
        report.workspace_id, report.cap
    ));

    if report.matches.is_empty() {
        output.push_str("- no matches\n");
        return output;
    }

    for entry in &report.matches {
        output.push_str(&format!(
            "- {} [{}] score {}: {}\n",
            entry.name,
            entry.id,
            entry.score,
            entry.reasons.join("; ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{EntityRef, MatchEntry};

    fn report(matches: Vec<MatchEntry>) -> MatchReport {
        MatchReport {
            workspace_id: "ws-1".to_string(),
            direction: Direction::ProjectsForContact,
            source: EntityRef {
                id: "c1".to_string(),
                name: "Ada".to_string(),
            },
            cap: 5,
            matches,
        }
    }

    #[test]
    fn markdown_lists_each_match_with_reasons() {
        let rendered = to_markdown(&report(vec![MatchEntry {
            id: "p1".to_string(),
            name: "Night Shift".to_string(),
            score: 6,
            reasons: vec![
                "Matches your Film expertise".to_string(),
                "Shares tags: #noir".to_string(),
            ],
        }]));

        assert!(rendered.contains("# Suggested projects for Ada"));
        assert!(rendered.contains(
            "- Night Shift [p1] score 6: Matches your Film expertise; Shares tags: #noir"
        ));
    }

    #[test]
    fn markdown_marks_empty_results() {
        let rendered = to_markdown(&report(vec![]));
        assert!(rendered.contains("- no matches"));
    }
}
