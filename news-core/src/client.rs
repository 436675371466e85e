use crate::config::NewsConfig;
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::parse::{ParseOutcome, Parser};
use crate::request::SearchRequest;

/// Fetcher and parser wired together. One client can serve any number of
/// sequential calls; each call is independent of the last.
#[derive(Debug, Clone)]
pub struct NewsClient {
    fetcher: Fetcher,
    parser: Parser,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            fetcher: Fetcher::new(config.fetch)?,
            parser: Parser::new(config.parse),
        })
    }

    /// Fetch the given request URL and map the response onto article records.
    ///
    /// Fetch failures come back as the error; everything the parser has to
    /// say about the body, including "the body was empty", is in the outcome.
    pub async fn fetch_news_data(&self, request_url: &str) -> Result<ParseOutcome, FetchError> {
        let body = self.fetcher.fetch(request_url).await?;
        Ok(self.parser.parse(&body))
    }

    /// Build the URL for `request`, then run
    /// [`fetch_news_data`](Self::fetch_news_data) on it.
    pub async fn search(&self, request: &SearchRequest) -> Result<ParseOutcome, FetchError> {
        let url = request
            .to_url()
            .map_err(|source| FetchError::MalformedRequest {
                url: request.endpoint.clone(),
                source,
            })?;
        self.fetch_news_data(url.as_str()).await
    }
}
