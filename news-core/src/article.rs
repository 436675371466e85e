use serde::{Deserialize, Serialize};

/// One display-ready article, flattened from a single search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleRecord {
    pub title: String,
    /// Section name plus author label, already composed for display.
    pub details: String,
    /// Publication date-time exactly as the API sent it; never reformatted here.
    pub published_at: String,
    pub url: String,
}
