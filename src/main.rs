use clap::Parser;
use gw_wiki_tools::{Dispatcher, ServerConfig, WikiFetcher, server};
use std::sync::Arc;
use tokio::io::BufReader;

mod args;
use args::{Args, TransportArg};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (stderr, so the stdio transport stays clean)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            ::log::info!("Loading config from {}", path.display());
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::default(),
    };
    let config = args.apply(config);
    ::log::debug!("Using config: {:?}", config);

    let fetcher = WikiFetcher::new(&config)?;
    let dispatcher = Arc::new(Dispatcher::new(fetcher, config.builds_origin()?));

    match args.transport {
        TransportArg::Http => server::serve_http(&config, dispatcher).await?,
        TransportArg::Stdio => {
            let stdin = BufReader::new(tokio::io::stdin());
            server::serve_stdio(dispatcher, stdin, tokio::io::stdout()).await?
        }
    }

    Ok(())
}
