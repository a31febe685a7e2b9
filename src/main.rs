use clap::Parser;
use menu_lens::domain::ports::Storage;
use menu_lens::utils::{logger, validation::Validate};
use menu_lens::{CliConfig, LocalStorage, MenuEngine, MenuPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting menu-lens");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let image = config.image.clone();
    let output = config.output.clone();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = MenuPipeline::new(storage.clone(), config);
    let engine = MenuEngine::new(pipeline);

    match engine.run(&image).await {
        Ok(bundle) => {
            let json = serde_json::to_string_pretty(&bundle)?;
            match output {
                Some(path) => {
                    storage.write_file(&path, json.as_bytes()).await?;
                    tracing::info!("Catalog bundle saved to: {}", path);
                    println!("✅ Extracted {} menu items", bundle.catalog.len());
                    println!("📁 Catalog saved to: {}", path);
                }
                None => println!("{}", json),
            }
        }
        Err(e) => {
            tracing::error!("Menu extraction failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
