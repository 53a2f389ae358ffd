use crate::error::ToolError;

/// Build categories listed on the build wiki
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildCategory {
    General,
    Farming,
    Running,
    Quest,
    Hero,
    Speedclear,
    Teams,
}

/// Slug and category page for each build category, in listing order
const CATEGORY_TABLE: [(BuildCategory, &str, &str); 7] = [
    (
        BuildCategory::General,
        "general",
        "Category:All_working_general_builds",
    ),
    (
        BuildCategory::Farming,
        "farming",
        "Category:All_working_farming_builds",
    ),
    (
        BuildCategory::Running,
        "running",
        "Category:All_working_running_builds",
    ),
    (
        BuildCategory::Quest,
        "quest",
        "Category:All_working_quest_builds",
    ),
    (
        BuildCategory::Hero,
        "hero",
        "Category:All_working_hero_builds",
    ),
    (
        BuildCategory::Speedclear,
        "speedclear",
        "Category:All_working_SC_builds",
    ),
    (
        BuildCategory::Teams,
        "teams",
        "Category:All_working_PvE_team_builds",
    ),
];

impl BuildCategory {
    /// Look up a category by slug, ignoring case and surrounding whitespace
    pub fn from_slug(slug: &str) -> Result<Self, ToolError> {
        let wanted = slug.trim().to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(_, s, _)| *s == wanted)
            .map(|(category, _, _)| *category)
            .ok_or_else(|| ToolError::InvalidCategory {
                category: wanted,
                valid: Self::valid_slugs(),
            })
    }

    /// All slugs, comma separated
    pub fn valid_slugs() -> String {
        Self::all()
            .map(|c| c.slug())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn all() -> impl Iterator<Item = BuildCategory> {
        CATEGORY_TABLE.iter().map(|(c, _, _)| *c)
    }

    pub fn slug(self) -> &'static str {
        self.entry().1
    }

    /// Page path of the category listing, relative to the build wiki base
    pub fn path(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (BuildCategory, &'static str, &'static str) {
        // Table rows follow variant declaration order
        &CATEGORY_TABLE[self as usize]
    }
}
