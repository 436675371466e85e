use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::article::ArticleRecord;
use crate::config::ParseConfig;
use crate::error::DocumentError;

const FIELD_TITLE: &str = "webTitle";
const FIELD_URL: &str = "webUrl";
const FIELD_PUBLISHED: &str = "webPublicationDate";
const FIELD_SECTION: &str = "sectionName";

// Three spaces, exactly what the display layer expects between section and author.
const DETAILS_SEPARATOR: &str = "   ";

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    results: Vec<Value>,
}

/// What one parse call produced.
#[derive(Debug)]
pub enum ParseOutcome {
    /// The raw body was empty; there was no document to parse.
    NoDocument,
    /// Every result entry mapped cleanly.
    Complete(Vec<ArticleRecord>),
    /// All results mapped, but `fallbacks` of them carry the unknown-author label.
    Degraded {
        records: Vec<ArticleRecord>,
        fallbacks: usize,
    },
    /// A document-level failure stopped the parse; `records` holds whatever
    /// was mapped before the failure point.
    Aborted {
        records: Vec<ArticleRecord>,
        error: DocumentError,
    },
}

impl ParseOutcome {
    /// Best-effort records regardless of outcome, in API order.
    pub fn records(&self) -> &[ArticleRecord] {
        match self {
            ParseOutcome::NoDocument => &[],
            ParseOutcome::Complete(records) => records,
            ParseOutcome::Degraded { records, .. } => records,
            ParseOutcome::Aborted { records, .. } => records,
        }
    }

    pub fn into_records(self) -> Vec<ArticleRecord> {
        match self {
            ParseOutcome::NoDocument => Vec::new(),
            ParseOutcome::Complete(records) => records,
            ParseOutcome::Degraded { records, .. } => records,
            ParseOutcome::Aborted { records, .. } => records,
        }
    }
}

/// JSON-to-record half of the pipeline.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParseConfig,
}

impl Parser {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Map a raw response body onto ordered article records.
    ///
    /// An unusable author tag degrades that one record to the fallback label;
    /// anything wrong with the document itself aborts the parse and keeps
    /// whatever was already mapped.
    pub fn parse(&self, raw_body: &str) -> ParseOutcome {
        if raw_body.is_empty() {
            debug!("empty response body, nothing to parse");
            return ParseOutcome::NoDocument;
        }

        let envelope: SearchEnvelope = match serde_json::from_str(raw_body) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(error = %err, "response document is unusable");
                return ParseOutcome::Aborted {
                    records: Vec::new(),
                    error: DocumentError::Envelope(err),
                };
            }
        };

        let results = envelope.response.results;
        let mut records = Vec::with_capacity(results.len());
        let mut fallbacks = 0usize;

        for (index, result) in results.iter().enumerate() {
            match self.record_from_result(index, result) {
                Ok((record, used_fallback)) => {
                    if used_fallback {
                        fallbacks += 1;
                    }
                    records.push(record);
                }
                Err(error) => {
                    warn!(error = %error, kept = records.len(), "parse aborted mid-document");
                    return ParseOutcome::Aborted { records, error };
                }
            }
        }

        if fallbacks > 0 {
            debug!(count = records.len(), fallbacks, "parsed document with author fallbacks");
            ParseOutcome::Degraded { records, fallbacks }
        } else {
            debug!(count = records.len(), "parsed document");
            ParseOutcome::Complete(records)
        }
    }

    fn record_from_result(
        &self,
        index: usize,
        result: &Value,
    ) -> Result<(ArticleRecord, bool), DocumentError> {
        let title = required_string(result, index, FIELD_TITLE)?;
        let url = required_string(result, index, FIELD_URL)?;
        let published_at = required_string(result, index, FIELD_PUBLISHED)?;
        let section = required_string(result, index, FIELD_SECTION)?;

        let (author, used_fallback) = match self.author_label(result) {
            Some(author) => (author, false),
            None => {
                debug!(index, field = %self.config.tags_field, "no usable author tag, using fallback label");
                (self.config.unknown_author.clone(), true)
            }
        };

        let record = ArticleRecord {
            title,
            details: format!("{section}{DETAILS_SEPARATOR}{author}"),
            published_at,
            url,
        };
        Ok((record, used_fallback))
    }

    /// Author label from the first entry of the configured tags array, or
    /// `None` when the tags are absent or unusable (the record-level fallback
    /// case). An empty tag title still counts as an author: the label
    /// degrades to the bare prefix.
    fn author_label(&self, result: &Value) -> Option<String> {
        let first = result.get(&self.config.tags_field)?.as_array()?.first()?;
        let name = first.get(FIELD_TITLE)?.as_str()?;
        Some(format!("{}{}", self.config.author_prefix, name))
    }
}

fn required_string(
    result: &Value,
    index: usize,
    field: &'static str,
) -> Result<String, DocumentError> {
    result
        .get(field)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or(DocumentError::Field { index, field })
}
