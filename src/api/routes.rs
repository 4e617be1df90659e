use axum::{
    routing::post,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::info;
use url::Url;

use crate::error::{Result, AppError};
use crate::api::json::AppJson;
use crate::api::models::{BatchItem, BatchScrapeRequest, ScrapeRequest, ScrapeResult};
use crate::batch::scrape_batch;
use crate::scraper::{scrape_url, Fetcher};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/scrape/single", post(scrape_single))
        .route("/scrape/batch", post(scrape_batch_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn scrape_single(
    State(state): State<AppState>,
    AppJson(req): AppJson<ScrapeRequest>,
) -> Result<Json<ScrapeResult>> {
    validate_url(&req.url)?;
    info!(url = %req.url, "Processing single scrape");

    let fetcher = Fetcher::new(state.config.fetch_timeout)?;
    let result = scrape_url(&fetcher, &req.url).await?;

    Ok(Json(result))
}

async fn scrape_batch_handler(
    State(state): State<AppState>,
    AppJson(req): AppJson<BatchScrapeRequest>,
) -> Result<Json<Vec<BatchItem>>> {
    for url in &req.urls {
        validate_url(url)?;
    }
    info!(count = req.urls.len(), "Processing batch scrape");

    let fetcher = Fetcher::new(state.config.fetch_timeout)?;
    let items = scrape_batch(&fetcher, &req.urls).await;

    Ok(Json(items))
}

/// Accepts only absolute http(s) URLs with a host.
pub fn validate_url(raw: &str) -> Result<Url> {
    let invalid = |message: &str| AppError::InvalidUrl {
        url: raw.to_string(),
        message: message.to_string(),
    };

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("URL scheme should be 'http' or 'https'"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host"));
    }

    Ok(url)
}
