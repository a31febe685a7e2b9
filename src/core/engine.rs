use crate::core::Pipeline;
use crate::domain::model::MenuBundle;
use crate::utils::error::Result;

/// Drives the pipeline stages in order: encode, extract, parse, enrich.
///
/// Only encoding failures and structurally invalid extraction payloads
/// escape; everything else is handled inside the stages. The finished bundle
/// is write-once: nothing downstream ever sees a partial catalog or a
/// partial image map.
pub struct MenuEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MenuEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, image_path: &str) -> Result<MenuBundle> {
        tracing::info!("Encoding menu image: {}", image_path);
        let encoded = self.pipeline.encode(image_path).await?;

        tracing::info!("Requesting menu extraction");
        let raw = self.pipeline.extract(&encoded).await?;

        let catalog = self.pipeline.parse(&raw).await?;
        tracing::info!("Extracted {} menu items", catalog.len());

        tracing::info!("Enriching items with photos");
        let images = self.pipeline.enrich(&catalog).await?;
        let found = images.values().filter(|url| url.is_some()).count();
        tracing::info!("Found photos for {}/{} items", found, catalog.len());

        Ok(MenuBundle { catalog, images })
    }
}
