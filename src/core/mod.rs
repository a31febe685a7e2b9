pub mod encoder;
pub mod engine;
pub mod enrichment;
pub mod extraction;
pub mod parser;
pub mod pipeline;
pub mod schema;

pub use crate::domain::model::{ItemImageMap, MenuBundle, MenuCatalog, MenuItem};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
