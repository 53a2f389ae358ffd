use serde::{Deserialize, Serialize};

/// Structured facts pulled from a quest page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestRecord {
    /// Quest name as requested by the caller
    pub name: String,

    /// Whether the page could be read as a quest at all
    pub found: bool,

    /// Objective lines, `None` when the page has no objectives list
    pub objectives: Option<Vec<String>>,

    /// Reward lines, `None` when the page has no rewards list
    pub rewards: Option<Vec<String>>,

    /// Walkthrough paragraphs joined by newlines
    pub walkthrough: Option<String>,

    /// Note lines, `None` when the page has no notes list
    pub notes: Option<Vec<String>>,
}

impl QuestRecord {
    /// Create an empty, found record for the given quest
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            found: true,
            objectives: None,
            rewards: None,
            walkthrough: None,
            notes: None,
        }
    }

    /// Create a record for a quest that could not be read
    pub fn not_found(name: &str) -> Self {
        Self {
            found: false,
            ..Self::new(name)
        }
    }
}

/// Skill facts taken from the skill infobox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub found: bool,
    pub profession: Option<String>,
    pub attribute: Option<String>,
    /// Never filled by the infobox scan; kept so renderers have a slot for it
    pub campaign: Option<String>,
    pub energy: Option<String>,
    pub activation: Option<String>,
    pub recharge: Option<String>,
    pub description: Option<String>,
}

impl SkillRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            found: true,
            profession: None,
            attribute: None,
            campaign: None,
            energy: None,
            activation: None,
            recharge: None,
            description: None,
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self {
            found: false,
            ..Self::new(name)
        }
    }
}

/// A single build link from a category listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEntry {
    /// Link text of the build
    pub name: String,

    /// Absolute URL of the build page (empty when the link had no href)
    pub url: String,
}

impl BuildEntry {
    pub fn new(name: String, url: String) -> Self {
        Self { name, url }
    }
}

/// Builds listed under one category, plus the caller's display limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildCategoryResult {
    /// Category slug as requested
    pub category: String,

    /// Builds in document order
    pub builds: Vec<BuildEntry>,

    /// Maximum number of builds to show; `None` or zero shows all
    pub limit: Option<usize>,
}

impl BuildCategoryResult {
    pub fn new(category: &str, builds: Vec<BuildEntry>, limit: Option<usize>) -> Self {
        Self {
            category: category.to_string(),
            builds,
            limit,
        }
    }

    /// Effective limit, treating zero as "no limit"
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&l| l > 0)
    }

    /// Whether the limit hides some of the builds
    pub fn is_truncated(&self) -> bool {
        self.effective_limit()
            .is_some_and(|limit| limit < self.builds.len())
    }
}
