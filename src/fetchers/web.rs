use crate::config::ServerConfig;
use crate::error::FetchError;
use crate::fetchers::{PageSource, Site};
use crate::utils::{join_url, page_path};
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use url::Url;

/// Redirect hops followed before a fetch is abandoned
const MAX_REDIRECTS: usize = 10;

/// Fetches raw wiki markup over HTTP
///
/// One GET per call: no retries and no caching. Failures are logged and
/// reported to the caller as `None`.
#[derive(Debug, Clone)]
pub struct WikiFetcher {
    client: Client,
    wiki_base_url: String,
    builds_base_url: String,
}

impl WikiFetcher {
    /// Create a fetcher using the bases, timeout and user agent from `config`
    pub fn new(config: &ServerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            wiki_base_url: config.wiki_base_url.clone(),
            builds_base_url: config.builds_base_url.clone(),
        })
    }

    /// Base URL pages of `site` are resolved against
    pub fn base_url(&self, site: Site) -> &str {
        match site {
            Site::Wiki => &self.wiki_base_url,
            Site::Builds => &self.builds_base_url,
        }
    }

    /// Full URL of a page, with spaces in the name mapped to underscores
    pub fn page_url(&self, site: Site, identifier: &str) -> String {
        join_url(self.base_url(site), &page_path(identifier))
    }

    /// Fetch a URL, returning the body of a 200 response
    pub async fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self.client.get(parsed).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Network {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }
}

#[async_trait]
impl PageSource for WikiFetcher {
    async fn fetch_page(&self, site: Site, identifier: &str) -> Option<String> {
        let url = self.page_url(site, identifier);
        let start = Instant::now();
        ::log::debug!("FETCH: {}", url);

        match self.try_fetch(&url).await {
            Ok(body) => {
                ::log::debug!(
                    "Fetched {} ({} bytes) in {:.2} seconds",
                    url,
                    body.len(),
                    start.elapsed().as_secs_f64()
                );
                Some(body)
            }
            Err(e @ FetchError::Status { .. }) => {
                ::log::warn!("{}", e);
                None
            }
            Err(e) => {
                ::log::error!("Error fetching wiki page: {}", e);
                None
            }
        }
    }
}
