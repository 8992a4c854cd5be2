use crate::api::endpoint;
use crate::domain::model::Product;
use crate::domain::ports::ProductGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ProductApi {
    client: Client,
    base_url: String,
}

impl ProductApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProductGateway for ProductApi {
    async fn search_by_title(&self, title: &str) -> Result<Vec<Product>> {
        let url = endpoint(&self.base_url, "/api/products");
        tracing::debug!("GET {} title.contains={:?}", url, title);
        let response = self
            .client
            .get(&url)
            .query(&[("title.contains", title)])
            .send()
            .await?
            .error_for_status()?;
        let products = response.json().await?;
        Ok(products)
    }
}
