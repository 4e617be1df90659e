use serde::{Deserialize, Serialize};

use crate::error::{AppError, FailureKind};
use crate::extract::PageMetadata;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchScrapeRequest {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    pub url: String,
    pub metadata: PageMetadata,
    pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeFailure {
    pub url: String,
    pub error: String,
    #[serde(skip)]
    pub kind: FailureKind,
}

impl ScrapeFailure {
    pub fn new(url: &str, err: &AppError) -> Self {
        Self {
            url: url.to_string(),
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

/// One outcome slot of a batch; serialized without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BatchItem {
    Success(ScrapeResult),
    Failure(ScrapeFailure),
}

impl BatchItem {
    pub fn url(&self) -> &str {
        match self {
            BatchItem::Success(result) => &result.url,
            BatchItem::Failure(failure) => &failure.url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchItem::Success(_))
    }
}
