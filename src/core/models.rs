use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeSet<String>, // Category tags, matched by the filter buttons
}

impl ProjectCard {
    pub fn new(title: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    /// Title followed by the tags, lowercased. This is the haystack for free-text search.
    pub fn search_text(&self) -> String {
        let tags = self.tags.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
        format!("{} {}", self.title, tags).to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<String>, // Entries revealed one by one
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub name: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatInfo {
    pub label: String,
    pub display: String, // e.g. "15+"; the digits become the counter goal
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    pub label: String,
    pub tag: String,
}

impl FilterButton {
    pub fn new(label: &str, tag: &str) -> Self {
        Self { label: label.to_string(), tag: tag.to_string() }
    }
}
