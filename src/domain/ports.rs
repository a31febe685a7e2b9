use crate::domain::model::{ItemImageMap, MenuCatalog};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn extraction_endpoint(&self) -> &str;
    fn extraction_api_key(&self) -> &str;
    fn extraction_model(&self) -> &str;
    fn photo_endpoint(&self) -> &str;
    fn photo_api_key(&self) -> &str;
    fn retry_delay(&self) -> Duration;
    fn max_attempts(&self) -> u32;
    fn concurrent_lookups(&self) -> usize;
    fn lookup_timeout(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn encode(&self, image_path: &str) -> Result<String>;
    async fn extract(&self, encoded_image: &str) -> Result<String>;
    async fn parse(&self, raw: &str) -> Result<MenuCatalog>;
    async fn enrich(&self, catalog: &MenuCatalog) -> Result<ItemImageMap>;
}
