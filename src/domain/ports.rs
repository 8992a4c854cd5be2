use crate::domain::model::{CartItem, News, Product};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CartItemGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<CartItem>>;
    async fn create(&self, product: &Product) -> Result<CartItem>;
    /// The backend answers 204 No Content on delete; there is nothing to
    /// return beyond success.
    async fn delete(&self, cart_item_id: i64) -> Result<()>;
}

#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Server-side substring match on title. The empty string matches
    /// everything and doubles as "list all products".
    async fn search_by_title(&self, title: &str) -> Result<Vec<Product>>;
}

#[async_trait]
pub trait NewsGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<News>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}
