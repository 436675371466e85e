use thiserror::Error;

/// Failures that stop a fetch before any document reaches the parser.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("malformed request URL {url:?}: {source}")]
    MalformedRequest {
        url: String,
        source: url::ParseError,
    },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server answered {status}")]
    HttpStatus { status: reqwest::StatusCode },
}

/// Document-level parse failures; the response is unusable past the failure
/// point, per-record author fallbacks are not errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unusable response document: {0}")]
    Envelope(#[from] serde_json::Error),
    #[error("result {index}: required field {field:?} is missing or not a string")]
    Field { index: usize, field: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
