use crate::core::enrichment::PhotoEnricher;
use crate::core::extraction::ExtractionClient;
use crate::core::{encoder, parser};
use crate::domain::model::{ItemImageMap, MenuCatalog};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;

/// The concrete extraction-and-enrichment pipeline: storage for the local
/// image, one shared HTTP client, and the two remote collaborators behind it.
pub struct MenuPipeline<S: Storage, C: ConfigProvider + 'static> {
    storage: S,
    extraction: ExtractionClient<C>,
    enrichment: PhotoEnricher<C>,
}

impl<S: Storage, C: ConfigProvider + 'static> MenuPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let config = Arc::new(config);
        let client = Client::new();
        Self {
            storage,
            extraction: ExtractionClient::new(client.clone(), config.clone()),
            enrichment: PhotoEnricher::new(client, config),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider + 'static> Pipeline for MenuPipeline<S, C> {
    async fn encode(&self, image_path: &str) -> Result<String> {
        encoder::encode_image(&self.storage, image_path).await
    }

    async fn extract(&self, encoded_image: &str) -> Result<String> {
        self.extraction.extract(encoded_image).await
    }

    async fn parse(&self, raw: &str) -> Result<MenuCatalog> {
        parser::parse_catalog(raw)
    }

    async fn enrich(&self, catalog: &MenuCatalog) -> Result<ItemImageMap> {
        Ok(self.enrichment.enrich(catalog).await)
    }
}
