pub mod web;

use async_trait::async_trait;

/// The two wikis pages are fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// Game wiki with quest and skill articles
    Wiki,
    /// Build wiki with category listings
    Builds,
}

// Base trait for anything that can hand back raw page markup
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a page by display name; `None` when it is missing or unreachable
    async fn fetch_page(&self, site: Site, identifier: &str) -> Option<String>;
}
