mod check;
mod cli;
mod config;
mod error;
mod links;
mod matching;
mod report;
mod types;
mod workspace;

use crate::error::ReelmatchError;
use crate::types::entity::Taggable;
use crate::types::report::{EntityRef, MatchEntry, MatchReport};
use crate::types::scoring::{Direction, MatchSettings};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn snapshot_root(snapshot: &Path) -> &Path {
    match snapshot.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn build_report<S: Taggable, C: Taggable>(
    workspace_id: &str,
    source: &S,
    candidates: &[C],
    catalog: &types::entity::Catalog,
    settings: &MatchSettings,
) -> MatchReport {
    let matches = matching::score_matches(source.attributes(), candidates, catalog, settings)
        .into_iter()
        .map(MatchEntry::from)
        .collect();
    MatchReport {
        workspace_id: workspace_id.to_string(),
        direction: settings.direction,
        source: EntityRef::of(source),
        cap: settings.cap,
        matches,
    }
}

fn run() -> Result<i32, ReelmatchError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Match(cmd) => {
            let root = snapshot_root(&cmd.snapshot);
            let loaded = config::load_config(root)?;
            let workspace = workspace::load_workspace(&cmd.snapshot)?;

            let (direction, source_id) = match (cmd.contact.as_deref(), cmd.project.as_deref()) {
                (Some(id), _) => (Direction::ProjectsForContact, id),
                (None, Some(id)) => (Direction::ContactsForProject, id),
                (None, None) => {
                    return Err(ReelmatchError::InvalidArguments(
                        "either --contact or --project is required".to_string(),
                    ))
                }
            };
            let cap = cmd.cap.unwrap_or_else(|| loaded.cap(direction));
            let settings = MatchSettings::new(direction, cap).with_weights(loaded.weights());

            let match_report = match direction {
                Direction::ProjectsForContact => build_report(
                    &workspace.workspace_id,
                    workspace.contact(source_id)?,
                    &workspace.projects,
                    &workspace.catalog,
                    &settings,
                ),
                Direction::ContactsForProject => build_report(
                    &workspace.workspace_id,
                    workspace.project(source_id)?,
                    &workspace.contacts,
                    &workspace.catalog,
                    &settings,
                ),
            };
            info!(
                direction = direction.as_str(),
                source = %match_report.source.id,
                matches = match_report.matches.len(),
                "matching finished"
            );

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&match_report, output_format)?;
            println!("{rendered}");

            if cmd.export_links {
                if match_report.matches.is_empty() {
                    eprintln!("warning: no matches to export");
                } else {
                    let plan = links::LinkPlan::from_report(&match_report);
                    let path = links::write_plan(root, loaded.links_dir(), &plan)?;
                    eprintln!("link plan: {}", path.display());
                }
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let workspace = workspace::load_workspace(&cmd.snapshot)?;
            let findings = check::check_workspace(&workspace);

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
