//! Guild Wars wiki tools: fetch quest, skill and build-listing pages and
//! render the facts they hold as plain text, served as JSON-RPC tools.

pub mod categories;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod render;
pub mod results;
pub mod server;
pub mod tools;
pub mod utils;

// Re-export commonly used types for convenience
pub use categories::BuildCategory;
pub use config::ServerConfig;
pub use fetchers::web::WikiFetcher;
pub use fetchers::{PageSource, Site};
pub use results::{BuildCategoryResult, BuildEntry, QuestRecord, SkillRecord};
pub use tools::Dispatcher;
