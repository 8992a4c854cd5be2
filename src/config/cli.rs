use crate::config::{StoreConfig, StoreSettings};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "A storefront client: browse products, manage a cart, read the news banner")]
pub struct CliConfig {
    /// Backend base URL (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<String>,

    /// HTTP request timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the news banner and the product listing filtered by title
    Browse {
        #[arg(default_value = "")]
        title: String,
    },
    /// Show the cart contents and total
    Cart,
    /// Add a product to the cart by product id
    Add { product_id: i64 },
    /// Remove a cart item by id
    Remove { cart_item_id: i64 },
    /// Show the news banner
    News,
}

impl CliConfig {
    /// Resolves the effective settings: defaults, then the config file if
    /// given, then explicit flags.
    pub fn settings(&self) -> Result<StoreSettings> {
        let mut settings = match &self.config {
            Some(path) => StoreConfig::from_file(path)?.into_settings(),
            None => StoreSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.request_timeout_secs = timeout_secs;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let config = CliConfig::parse_from(["storefront", "cart"]);
        let settings = config.settings().unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn flags_override_defaults() {
        let config = CliConfig::parse_from([
            "storefront",
            "--base-url",
            "https://shop.example.com",
            "--timeout-secs",
            "5",
            "browse",
            "mug",
        ]);
        let settings = config.settings().unwrap();
        assert_eq!(settings.base_url, "https://shop.example.com");
        assert_eq!(settings.request_timeout_secs, 5);
        assert!(matches!(config.command, Command::Browse { ref title } if title == "mug"));
    }
}
