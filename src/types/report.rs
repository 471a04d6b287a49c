use crate::types::entity::Taggable;
use crate::types::scoring::{Direction, MatchResult, Score};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

impl EntityRef {
    pub fn of<T: Taggable>(entity: &T) -> Self {
        Self {
            id: entity.id().to_string(),
            name: entity.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchEntry {
    pub id: String,
    pub name: String,
    pub score: Score,
    pub reasons: Vec<String>,
}

impl<T: Taggable> From<MatchResult<'_, T>> for MatchEntry {
    fn from(result: MatchResult<'_, T>) -> Self {
        Self {
            id: result.candidate.id().to_string(),
            name: result.candidate.display_name().to_string(),
            score: result.score,
            reasons: result.reasons,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub workspace_id: String,
    pub direction: Direction,
    pub source: EntityRef,
    pub cap: usize,
    pub matches: Vec<MatchEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}
