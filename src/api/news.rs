use crate::api::endpoint;
use crate::domain::model::News;
use crate::domain::ports::NewsGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct NewsApi {
    client: Client,
    base_url: String,
}

impl NewsApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl NewsGateway for NewsApi {
    async fn list(&self) -> Result<Vec<News>> {
        let url = endpoint(&self.base_url, "/api/news");
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let news = response.json().await?;
        Ok(news)
    }
}
