use futures::future::join_all;
use tracing::{info, warn};

use crate::api::models::{BatchItem, ScrapeFailure};
use crate::scraper::{scrape_url, Fetcher};

/// Scrapes every URL concurrently.
///
/// The returned slots line up with `urls` one to one, duplicates included. A failing
/// URL only fills its own slot with a [`ScrapeFailure`].
pub async fn scrape_batch(fetcher: &Fetcher, urls: &[String]) -> Vec<BatchItem> {
    let tasks = urls.iter().map(|url| async move {
        match scrape_url(fetcher, url).await {
            Ok(result) => BatchItem::Success(result),
            Err(err) => {
                warn!(url = %url, error = %err, "Failed");
                BatchItem::Failure(ScrapeFailure::new(url, &err))
            }
        }
    });

    let items = join_all(tasks).await;

    info!(
        input_count = urls.len(),
        succeeded = items.iter().filter(|item| item.is_success()).count(),
        "Batch scrape complete"
    );

    items
}
