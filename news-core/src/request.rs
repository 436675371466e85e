use url::Url;

/// Default endpoint of the Guardian content search API.
pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

// The tag class requested with every search; the contributor tag is where
// the author name comes from.
const SHOW_TAGS: &str = "contributor";

/// Parameters for one news-search call. Plain data; [`to_url`](Self::to_url)
/// renders it into the request URL the pipeline consumes.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Search endpoint; tests point this at a local mock server.
    pub endpoint: String,
    pub query: Option<String>,
    pub section: Option<String>,
    pub order_by: Option<String>,
    pub page_size: Option<u32>,
    pub api_key: String,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query: None,
            section: None,
            order_by: None,
            page_size: None,
            api_key: "test".to_string(),
        }
    }
}

impl SearchRequest {
    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.endpoint)?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = &self.query {
                pairs.append_pair("q", query);
            }
            if let Some(section) = &self.section {
                pairs.append_pair("section", section);
            }
            if let Some(order_by) = &self.order_by {
                pairs.append_pair("order-by", order_by);
            }
            if let Some(page_size) = self.page_size {
                pairs.append_pair("page-size", &page_size.to_string());
            }
            pairs.append_pair("show-tags", SHOW_TAGS);
            pairs.append_pair("api-key", &self.api_key);
        }
        Ok(url)
    }
}
