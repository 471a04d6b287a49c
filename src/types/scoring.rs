use serde::Serialize;

pub type Score = u32;

/// Which way a match runs. Only the reason wording and default cap differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ProjectsForContact,
    ContactsForProject,
}

impl Direction {
    pub fn medium_reason(self, names: &str) -> String {
        match self {
            Direction::ProjectsForContact => format!("Matches your {names} expertise"),
            Direction::ContactsForProject => format!("Works with {names}"),
        }
    }

    pub fn genre_reason(self, names: &str) -> String {
        match self {
            Direction::ProjectsForContact => format!("{names} genre matches your interests"),
            Direction::ContactsForProject => format!("Interested in {names}"),
        }
    }

    pub fn budget_reason(self) -> &'static str {
        match self {
            Direction::ProjectsForContact => "Budget range matches your experience",
            Direction::ContactsForProject => "Works with matching budget ranges",
        }
    }

    pub fn tag_reason(self, tags: &str) -> String {
        format!("Shares tags: {tags}")
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::ProjectsForContact => "projects_for_contact",
            Direction::ContactsForProject => "contacts_for_project",
        }
    }
}

/// Points awarded per overlapping id or tag in each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub medium: Score,
    pub genre: Score,
    pub budget: Score,
    pub tag: Score,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            medium: 3,
            genre: 2,
            budget: 2,
            tag: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub direction: Direction,
    pub cap: usize,
    pub weights: Weights,
}

impl MatchSettings {
    pub fn new(direction: Direction, cap: usize) -> Self {
        Self {
            direction,
            cap,
            weights: Weights::default(),
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }
}

/// A scored candidate. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a, T> {
    pub candidate: &'a T,
    pub score: Score,
    pub reasons: Vec<String>,
}
