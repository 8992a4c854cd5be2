use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use storefront::api::{CartItemApi, NewsApi, ProductApi};
use storefront::config::Command;
use storefront::domain::ports::ConfigProvider;
use storefront::utils::{logger, validation::Validate};
use storefront::{CliConfig, Storefront};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting storefront CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs()))
        .build()?;

    let store = Storefront::new(
        CartItemApi::new(client.clone(), settings.base_url()),
        ProductApi::new(client.clone(), settings.base_url()),
        NewsApi::new(client, settings.base_url()),
    );

    let result = match config.command {
        Command::Browse { ref title } => store.browse(title).await,
        Command::Cart => store.show_cart().await,
        Command::Add { product_id } => store.add_to_cart(product_id).await.map(|_| ()),
        Command::Remove { cart_item_id } => store.remove_from_cart(cart_item_id).await,
        Command::News => store.show_news().await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
