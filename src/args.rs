use clap::{Parser, ValueEnum};
use gw_wiki_tools::ServerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gw-wiki-tools")]
#[command(about = "Tool server answering Guild Wars quest, skill and PvE build questions")]
#[command(version)]
pub struct Args {
    /// JSON config file (missing keys take their defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Transport to serve tool calls on
    #[arg(short, long, value_enum, default_value_t = TransportArg::Http)]
    pub transport: TransportArg,

    /// Address to bind the HTTP transport to
    #[arg(long)]
    pub host: Option<String>,

    /// Port for the HTTP transport
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Page fetch timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    /// JSON-RPC over HTTP, plus a /health endpoint
    Http,
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config
    }
}
