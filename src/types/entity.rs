use serde::{Deserialize, Serialize};

pub type CatalogId = u32;

/// Scoring attributes shared by contacts and projects.
///
/// Any list missing from a snapshot deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub medium_ids: Vec<CatalogId>,
    #[serde(default)]
    pub genre_ids: Vec<CatalogId>,
    #[serde(default)]
    pub budget_range_ids: Vec<CatalogId>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
impl Attributes {
    pub fn new(
        medium_ids: &[CatalogId],
        genre_ids: &[CatalogId],
        budget_range_ids: &[CatalogId],
        tags: &[&str],
    ) -> Self {
        Self {
            medium_ids: medium_ids.to_vec(),
            genre_ids: genre_ids.to_vec(),
            budget_range_ids: budget_range_ids.to_vec(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

/// An entity the scorer can rank.
pub trait Taggable {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
    fn attributes(&self) -> &Attributes;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Taggable for Contact {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Taggable for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedEntry {
    pub id: CatalogId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRange {
    pub id: CatalogId,
    pub medium_id: CatalogId,
    pub label: String,
}

/// Lookup tables a workspace uses to name its categorical attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub mediums: Vec<NamedEntry>,
    #[serde(default)]
    pub genres: Vec<NamedEntry>,
    #[serde(default)]
    pub budget_ranges: Vec<BudgetRange>,
}

impl Catalog {
    pub fn medium_name(&self, id: CatalogId) -> Option<&str> {
        find_name(&self.mediums, id)
    }

    pub fn genre_name(&self, id: CatalogId) -> Option<&str> {
        find_name(&self.genres, id)
    }

    pub fn budget_range(&self, id: CatalogId) -> Option<&BudgetRange> {
        self.budget_ranges.iter().find(|range| range.id == id)
    }
}

fn find_name(entries: &[NamedEntry], id: CatalogId) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.name.as_str())
}
