use thiserror::Error;

/// Why a page fetch produced no markup. Logged by the fetcher, never returned past it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid page URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("timed out fetching {url}")]
    Timeout { url: String },
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to fetch {url}: {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Argument problems in a tool call, rendered back to the caller as text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("missing required argument '{0}'")]
    MissingArgument(&'static str),
    #[error("argument '{name}' must be {expected}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
    },
    #[error("Invalid category '{category}'. Valid options: {valid}")]
    InvalidCategory { category: String, valid: String },
}

/// Errors loading the server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid base URL {url}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
