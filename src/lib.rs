pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::MenuEngine, pipeline::MenuPipeline};
pub use domain::model::{ItemImageMap, MenuBundle, MenuCatalog, MenuItem};
pub use utils::error::{MenuError, Result};
