pub mod article;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod request;

pub use article::ArticleRecord;
pub use client::NewsClient;
pub use config::{FetchConfig, NewsConfig, ParseConfig};
pub use error::{ConfigError, DocumentError, FetchError};
pub use fetch::Fetcher;
pub use parse::{ParseOutcome, Parser};
pub use request::{SearchRequest, DEFAULT_ENDPOINT};
