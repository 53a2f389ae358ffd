pub mod builds;
pub mod quest;
pub mod sections;
pub mod skill;

#[cfg(test)]
mod tests;

use crate::fetchers::Site;

/// Kinds of page the extractors understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Quest article on the game wiki
    Quest,
    /// Skill article on the game wiki
    Skill,
    /// Category listing on the build wiki
    BuildCategory,
}

impl PageKind {
    /// Site that hosts this kind of page
    pub fn site(self) -> Site {
        match self {
            PageKind::Quest | PageKind::Skill => Site::Wiki,
            PageKind::BuildCategory => Site::Builds,
        }
    }

    /// Lower-case noun used in log lines and caller-facing messages
    pub fn noun(self) -> &'static str {
        match self {
            PageKind::Quest => "quest",
            PageKind::Skill => "skill",
            PageKind::BuildCategory => "build category",
        }
    }
}
