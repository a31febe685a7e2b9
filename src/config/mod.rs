pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "menu-lens")]
#[command(about = "Extract a structured, photo-enriched dish catalog from a menu photograph")]
pub struct CliConfig {
    /// Path to the menu photograph
    pub image: String,

    #[arg(long, default_value = "https://openrouter.ai/api/v1/chat/completions")]
    pub extraction_endpoint: String,

    #[arg(long, env = "MENU_LENS_EXTRACTION_KEY", hide_env_values = true)]
    pub extraction_api_key: String,

    #[arg(long, default_value = "google/gemini-2.0-flash-lite-preview-02-05:free")]
    pub extraction_model: String,

    #[arg(long, default_value = "https://pixabay.com/api/")]
    pub photo_endpoint: String,

    #[arg(long, env = "MENU_LENS_PHOTO_KEY", hide_env_values = true)]
    pub photo_api_key: String,

    /// Fixed wait between extraction attempts, in seconds
    #[arg(long, default_value = "10")]
    pub retry_delay_seconds: u64,

    /// Extraction attempts before giving up
    #[arg(long, default_value = "12")]
    pub max_attempts: u32,

    /// Photo lookups allowed in flight at once
    #[arg(long, default_value = "5")]
    pub concurrent_lookups: usize,

    /// Deadline for a single photo lookup, in seconds
    #[arg(long, default_value = "15")]
    pub lookup_timeout_seconds: u64,

    /// Write the finished catalog bundle to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn extraction_endpoint(&self) -> &str {
        &self.extraction_endpoint
    }

    fn extraction_api_key(&self) -> &str {
        &self.extraction_api_key
    }

    fn extraction_model(&self) -> &str {
        &self.extraction_model
    }

    fn photo_endpoint(&self) -> &str {
        &self.photo_endpoint
    }

    fn photo_api_key(&self) -> &str {
        &self.photo_api_key
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn concurrent_lookups(&self) -> usize {
        self.concurrent_lookups
    }

    fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("image", &self.image)?;
        validate_url("extraction_endpoint", &self.extraction_endpoint)?;
        validate_url("photo_endpoint", &self.photo_endpoint)?;
        validate_non_empty_string("extraction_api_key", &self.extraction_api_key)?;
        validate_non_empty_string("photo_api_key", &self.photo_api_key)?;
        validate_non_empty_string("extraction_model", &self.extraction_model)?;
        validate_positive_number("max_attempts", self.max_attempts as usize, 1)?;
        validate_positive_number("concurrent_lookups", self.concurrent_lookups, 1)?;
        validate_positive_number("lookup_timeout_seconds", self.lookup_timeout_seconds as usize, 1)?;
        Ok(())
    }
}
