use crate::domain::model::{ItemImageMap, MenuCatalog};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

#[derive(Debug, Deserialize)]
struct PhotoSearchResponse {
    #[serde(default)]
    hits: Vec<PhotoHit>,
}

#[derive(Debug, Deserialize)]
struct PhotoHit {
    #[serde(rename = "webformatURL")]
    webformat_url: String,
}

/// Attaches at most one representative photo URL to every catalog item.
///
/// Lookups fan out concurrently, bounded by a semaphore so large catalogs do
/// not hammer the photo service, with a per-lookup timeout so one slow query
/// cannot stall the barrier. Photos are best-effort: empty results, request
/// failures and timeouts all settle to `None` and never fail the catalog.
/// The returned map always has exactly the catalog's id set as keys.
pub struct PhotoEnricher<C: ConfigProvider> {
    client: Client,
    config: Arc<C>,
}

impl<C: ConfigProvider> PhotoEnricher<C> {
    pub fn new(client: Client, config: Arc<C>) -> Self {
        Self { client, config }
    }

    pub async fn enrich(&self, catalog: &MenuCatalog) -> ItemImageMap {
        // Seed every id with the sentinel up front so the key set is exact
        // no matter how individual tasks settle.
        let mut images: ItemImageMap = catalog.ids().map(|id| (id, None)).collect();

        let semaphore = Arc::new(Semaphore::new(self.config.concurrent_lookups().max(1)));
        let timeout = self.config.lookup_timeout();
        let mut lookups = JoinSet::new();

        for item in catalog.items() {
            let semaphore = semaphore.clone();
            let client = self.client.clone();
            let endpoint = self.config.photo_endpoint().to_string();
            let api_key = self.config.photo_api_key().to_string();
            let query = format!("homemade dish {}", item.title);
            let id = item.id;

            lookups.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return (id, None),
                };

                match tokio::time::timeout(
                    timeout,
                    first_photo_url(&client, &endpoint, &api_key, &query),
                )
                .await
                {
                    Ok(Ok(url)) => (id, url),
                    Ok(Err(e)) => {
                        tracing::debug!("photo lookup for item {} failed: {}", id, e);
                        (id, None)
                    }
                    Err(_) => {
                        tracing::debug!("photo lookup for item {} timed out", id);
                        (id, None)
                    }
                }
            });
        }

        // Full barrier: nothing is handed downstream until every lookup has
        // settled to a URL or the sentinel.
        while let Some(settled) = lookups.join_next().await {
            if let Ok((id, url)) = settled {
                images.insert(id, url);
            }
        }

        images
    }
}

async fn first_photo_url(
    client: &Client,
    endpoint: &str,
    api_key: &str,
    query: &str,
) -> Result<Option<String>> {
    let response = client
        .get(endpoint)
        .query(&[("key", api_key), ("q", query), ("image_type", "photo")])
        .send()
        .await?;

    let payload: PhotoSearchResponse = response.error_for_status()?.json().await?;
    Ok(payload.hits.into_iter().next().map(|hit| hit.webformat_url))
}
