pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{StoreConfig, StoreSettings};

pub use crate::core::{cart::CartService, catalog::ProductCatalog, storefront::Storefront};
pub use utils::error::{Result, StoreError};
