use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use tokio::task::JoinError;
use tracing::{error, info};

use crate::api::models::ScrapeResult;
use crate::clean::clean_text;
use crate::error::{AppError, Result};
use crate::extract::extract_page;

/// Issues GET requests through one shared connection pool.
///
/// Built once per incoming request; every fetch of a batch reuses it.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Fetches `url` once and returns its body, or the classified failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let result = match tokio::time::timeout(self.timeout, self.get_text(url)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout { url: url.to_string() }),
        };

        match &result {
            Ok(_) => info!(url = %url, "Fetched successfully"),
            Err(AppError::Timeout { .. }) => error!(url = %url, "Timeout"),
            Err(AppError::UpstreamStatus { status, .. }) => error!(url = %url, status, "HTTP error status"),
            Err(err) => error!(url = %url, error = %err, "Unexpected fetch error"),
        }

        result
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| transport_error(url, e))
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout { url: url.to_string() }
    } else {
        AppError::Fetch {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

fn parse_error(url: &str, err: JoinError) -> AppError {
    error!(url = %url, error = %err, "Error scraping page");
    AppError::Parse {
        url: url.to_string(),
        message: err.to_string(),
    }
}

/// Runs fetch, extraction and normalization for one URL.
pub async fn scrape_url(fetcher: &Fetcher, url: &str) -> Result<ScrapeResult> {
    let html = fetcher.fetch_html(url).await?;

    // Parsing is CPU-bound; keep it off the reactor and treat a parser panic as a parse failure.
    let page = tokio::task::spawn_blocking(move || extract_page(&html))
        .await
        .map_err(|e| parse_error(url, e))?;

    Ok(ScrapeResult {
        url: url.to_string(),
        metadata: page.metadata,
        content: clean_text(&page.content),
    })
}
