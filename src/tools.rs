//! Tool surface: definitions for `tools/list` and the fetch → parse → render
//! pipeline behind each tool call.

use serde_json::{Value, json};

use crate::categories::BuildCategory;
use crate::error::ToolError;
use crate::fetchers::PageSource;
use crate::parsers::{self, PageKind};
use crate::render;
use crate::results::BuildCategoryResult;

pub const GET_QUEST_INFO: &str = "get_quest_info";
pub const GET_SKILL_INFO: &str = "get_skill_info";
pub const GET_PVE_BUILDS: &str = "get_pve_builds";

/// Tool descriptors with their JSON input schemas
pub fn tool_definitions() -> Vec<Value> {
    let slugs: Vec<&str> = BuildCategory::all().map(BuildCategory::slug).collect();
    let category_help = format!("One of: {}", BuildCategory::valid_slugs());

    vec![
        json!({
            "name": GET_QUEST_INFO,
            "description": "Gets detailed information about a Guild Wars quest including objectives, rewards, and walkthrough. Use this when users ask about specific quests.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "quest_name": {
                        "type": "string",
                        "description": "The exact name of the quest (e.g., 'Against the Charr', 'The Path to Glory')"
                    }
                },
                "required": ["quest_name"]
            }
        }),
        json!({
            "name": GET_SKILL_INFO,
            "description": "Gets information about a specific Guild Wars skill including stats, profession, attribute, and description.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "skill_name": {
                        "type": "string",
                        "description": "The exact name of the skill (e.g., 'Meteor Shower', 'Healing Breeze')"
                    }
                },
                "required": ["skill_name"]
            }
        }),
        json!({
            "name": GET_PVE_BUILDS,
            "description": "Gets PvE build names from the GWPvX wiki by category (e.g., farming, running, hero, speedclear).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "enum": slugs,
                        "description": category_help
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Optional limit for number of builds to return (e.g., 10)"
                    }
                },
                "required": ["category"]
            }
        }),
    ]
}

/// Runs tool calls against a page source
///
/// Holds no per-call state, so one dispatcher serves concurrent calls.
pub struct Dispatcher<S> {
    source: S,
    builds_origin: String,
}

impl<S: PageSource> Dispatcher<S> {
    /// `builds_origin` is the scheme and host relative build links resolve against
    pub fn new(source: S, builds_origin: impl Into<String>) -> Self {
        Self {
            source,
            builds_origin: builds_origin.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one tool call and return its text; every failure becomes text too
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> String {
        let result = match name {
            GET_QUEST_INFO => self.quest_info(arguments).await,
            GET_SKILL_INFO => self.skill_info(arguments).await,
            GET_PVE_BUILDS => self.pve_builds(arguments).await,
            _ => {
                ::log::warn!("Unknown tool requested: {}", name);
                return format!("Unknown tool: {}", name);
            }
        };

        match result {
            Ok(text) => text,
            Err(e @ ToolError::InvalidCategory { .. }) => {
                ::log::info!("Rejected tool call {}: {}", name, e);
                e.to_string()
            }
            Err(e) => {
                ::log::error!("Error handling tool call {}: {:?}", name, e);
                format!("Error: {}", e)
            }
        }
    }

    async fn quest_info(&self, arguments: &Value) -> Result<String, ToolError> {
        let quest_name = required_str(arguments, "quest_name")?;
        ::log::info!("Fetching quest info for: {}", quest_name);

        let Some(html) = self.fetch(PageKind::Quest, quest_name).await else {
            return Ok(format!(
                "Could not fetch information for quest '{}'. The quest may not exist or there was a network error.",
                quest_name
            ));
        };

        let record = parsers::quest::parse(&html, quest_name);
        Ok(render::quest(&record))
    }

    async fn skill_info(&self, arguments: &Value) -> Result<String, ToolError> {
        let skill_name = required_str(arguments, "skill_name")?;
        ::log::info!("Fetching skill info for: {}", skill_name);

        let Some(html) = self.fetch(PageKind::Skill, skill_name).await else {
            return Ok(format!(
                "Could not fetch information for skill '{}'. The skill may not exist or there was a network error.",
                skill_name
            ));
        };

        let record = parsers::skill::parse(&html, skill_name);
        Ok(render::skill(&record))
    }

    async fn pve_builds(&self, arguments: &Value) -> Result<String, ToolError> {
        let category = BuildCategory::from_slug(required_str(arguments, "category")?)?;
        let limit = optional_limit(arguments)?;
        ::log::info!("Fetching PvE builds for category: {}", category.slug());

        let Some(html) = self.fetch(PageKind::BuildCategory, category.path()).await else {
            return Ok(format!(
                "Could not fetch PvE builds for category '{}'.",
                category.slug()
            ));
        };

        let builds = parsers::builds::parse(&html, &self.builds_origin);
        let result = BuildCategoryResult::new(category.slug(), builds, limit);
        Ok(render::builds(&result))
    }

    async fn fetch(&self, kind: PageKind, identifier: &str) -> Option<String> {
        let html = self.source.fetch_page(kind.site(), identifier).await;
        if html.is_none() {
            ::log::warn!("No markup for {} '{}'", kind.noun(), identifier);
        }
        html
    }
}

/// A required, non-blank string argument
fn required_str<'a>(arguments: &'a Value, key: &'static str) -> Result<&'a str, ToolError> {
    let value = arguments
        .get(key)
        .filter(|v| !v.is_null())
        .ok_or(ToolError::MissingArgument(key))?;

    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ToolError::InvalidArgument {
            name: key,
            expected: "a non-empty string",
        })
}

/// The optional `limit` argument; absent, null and zero all mean "no limit"
fn optional_limit(arguments: &Value) -> Result<Option<usize>, ToolError> {
    match arguments.get("limit") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(|n| Some(usize::try_from(n).unwrap_or(usize::MAX)))
            .ok_or(ToolError::InvalidArgument {
                name: "limit",
                expected: "a non-negative integer",
            }),
    }
}
