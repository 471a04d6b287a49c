use crate::error::ReelmatchError;
use crate::types::scoring::{Direction, Weights};
use serde::Deserialize;

pub const DEFAULT_PROJECTS_FOR_CONTACT_CAP: usize = 5;
pub const DEFAULT_CONTACTS_FOR_PROJECT_CAP: usize = 10;
pub const MAX_CAP: usize = 100;
pub const DEFAULT_LINKS_DIR: &str = ".reelmatch/links";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReelmatchConfig {
    pub matching: Option<MatchingConfig>,
    pub weights: Option<WeightsConfig>,
    pub links: Option<LinksConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    pub projects_for_contact_cap: Option<usize>,
    pub contacts_for_project_cap: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    pub medium: Option<u32>,
    pub genre: Option<u32>,
    pub budget: Option<u32>,
    pub tag: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    pub output_dir: Option<String>,
}

impl ReelmatchConfig {
    pub fn cap(&self, direction: Direction) -> usize {
        let matching = self.matching.as_ref();
        match direction {
            Direction::ProjectsForContact => matching
                .and_then(|matching| matching.projects_for_contact_cap)
                .unwrap_or(DEFAULT_PROJECTS_FOR_CONTACT_CAP),
            Direction::ContactsForProject => matching
                .and_then(|matching| matching.contacts_for_project_cap)
                .unwrap_or(DEFAULT_CONTACTS_FOR_PROJECT_CAP),
        }
    }

    pub fn weights(&self) -> Weights {
        let defaults = Weights::default();
        match &self.weights {
            Some(weights) => Weights {
                medium: weights.medium.unwrap_or(defaults.medium),
                genre: weights.genre.unwrap_or(defaults.genre),
                budget: weights.budget.unwrap_or(defaults.budget),
                tag: weights.tag.unwrap_or(defaults.tag),
            },
            None => defaults,
        }
    }

    pub fn links_dir(&self) -> &str {
        self.links
            .as_ref()
            .and_then(|links| links.output_dir.as_deref())
            .unwrap_or(DEFAULT_LINKS_DIR)
    }

    pub fn validate(&self) -> Result<(), ReelmatchError> {
        for (key, direction) in [
            (
                "matching.projects_for_contact_cap",
                Direction::ProjectsForContact,
            ),
            (
                "matching.contacts_for_project_cap",
                Direction::ContactsForProject,
            ),
        ] {
            if self.cap(direction) > MAX_CAP {
                return Err(ReelmatchError::ConfigParse(format!(
                    "{key} must be at most {MAX_CAP}"
                )));
            }
        }

        let weights = self.weights();
        for (key, value) in [
            ("medium", weights.medium),
            ("genre", weights.genre),
            ("budget", weights.budget),
            ("tag", weights.tag),
        ] {
            if value == 0 {
                return Err(ReelmatchError::ConfigParse(format!(
                    "weights.{key} must be greater than 0"
                )));
            }
        }

        if self.links_dir().trim().is_empty() {
            return Err(ReelmatchError::ConfigParse(
                "links.output_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
