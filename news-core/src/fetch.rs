use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::config::FetchConfig;
use crate::error::FetchError;

const USER_AGENT: &str = "NewsDesk/0.1";

/// HTTP retrieval half of the pipeline.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            // one connection per call, torn down when the call ends
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }

    /// GET the given URL and return the response body as text.
    ///
    /// The URL is validated before any network I/O happens; only a 200 answer
    /// counts as success, anything else is reported with its status code.
    pub async fn fetch(&self, request_url: &str) -> Result<String, FetchError> {
        let url = Url::parse(request_url).map_err(|source| {
            warn!(url = %request_url, error = %source, "refusing malformed request URL");
            FetchError::MalformedRequest {
                url: request_url.to_string(),
                source,
            }
        })?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, url = %request_url, "server answered non-200 status");
            return Err(FetchError::HttpStatus { status });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), url = %request_url, "fetched response body");
        Ok(body)
    }
}
