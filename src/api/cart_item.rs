use crate::api::endpoint;
use crate::domain::model::{CartItem, Product};
use crate::domain::ports::CartItemGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct CartItemApi {
    client: Client,
    base_url: String,
}

impl CartItemApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CartItemGateway for CartItemApi {
    async fn list(&self) -> Result<Vec<CartItem>> {
        let url = endpoint(&self.base_url, "/api/cart-items");
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let items = response.json().await?;
        Ok(items)
    }

    async fn create(&self, product: &Product) -> Result<CartItem> {
        let url = endpoint(&self.base_url, "/api/cart-items");
        tracing::debug!("POST {} (product id {})", url, product.id);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "product": product }))
            .send()
            .await?
            .error_for_status()?;
        let created = response.json().await?;
        Ok(created)
    }

    async fn delete(&self, cart_item_id: i64) -> Result<()> {
        let url = endpoint(&self.base_url, &format!("/api/cart-items/{}", cart_item_id));
        tracing::debug!("DELETE {}", url);
        self.client.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }
}
