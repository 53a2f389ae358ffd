use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Configuration for the tool server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP transport binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP transport listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the game wiki (quest and skill pages)
    #[serde(default = "default_wiki_base_url")]
    pub wiki_base_url: String,

    /// Base URL of the build wiki (category listings)
    #[serde(default = "default_builds_base_url")]
    pub builds_base_url: String,

    /// Per-request timeout for page fetches, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for host
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default value for port
fn default_port() -> u16 {
    8000
}

fn default_wiki_base_url() -> String {
    "https://wiki.guildwars.com/wiki".to_string()
}

fn default_builds_base_url() -> String {
    "https://gwpvx.fandom.com/wiki".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "GuildWars-MCP-Bot/1.0 (Educational; Rust)".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            wiki_base_url: default_wiki_base_url(),
            builds_base_url: default_builds_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Fetch timeout; `0` falls back to the default
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(default_timeout_secs()),
            secs => Duration::from_secs(secs),
        }
    }

    /// Scheme and host of the build wiki, used to absolutize relative links
    pub fn builds_origin(&self) -> Result<String, ConfigError> {
        let url = Url::parse(&self.builds_base_url).map_err(|source| ConfigError::BaseUrl {
            url: self.builds_base_url.clone(),
            source,
        })?;
        Ok(url.origin().ascii_serialization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.wiki_base_url, "https://wiki.guildwars.com/wiki");
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = ServerConfig::from_json(r#"{"timeout_secs": 0}"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ServerConfig::from_json(r#"{"port": 9000, "timeout_secs": 5}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.builds_base_url, "https://gwpvx.fandom.com/wiki");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "127.0.0.1"}}"#).unwrap();
        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ServerConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ServerConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_builds_origin() {
        let config = ServerConfig::default();
        assert_eq!(config.builds_origin().unwrap(), "https://gwpvx.fandom.com");

        let config = ServerConfig {
            builds_base_url: "not a url".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.builds_origin().is_err());
    }
}
