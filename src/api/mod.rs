// HTTP adapters: one thin reqwest wrapper per backend resource.

pub mod cart_item;
pub mod news;
pub mod product;

pub use cart_item::CartItemApi;
pub use news::NewsApi;
pub use product::ProductApi;

/// Joins the configured base URL with an `/api/...` path, tolerating a
/// trailing slash on the base.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
