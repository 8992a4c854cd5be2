use crate::domain::model::Product;
use crate::domain::ports::ProductGateway;
use crate::utils::error::Result;
use tokio::sync::watch;

/// Client-side product cache. `search` swaps the whole list for the server's
/// filtered result; there is no merging with earlier results and no
/// cancellation of overlapping searches (last completion wins).
pub struct ProductCatalog<G: ProductGateway> {
    gateway: G,
    products: watch::Sender<Vec<Product>>,
}

impl<G: ProductGateway> ProductCatalog<G> {
    pub fn new(gateway: G) -> Self {
        let (products, _) = watch::channel(Vec::new());
        Self { gateway, products }
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    pub async fn search(&self, title: &str) -> Result<()> {
        let products = self.gateway.search_by_title(title).await?;
        tracing::debug!("Search {:?} returned {} products", title, products.len());
        self.products.send_replace(products);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeGateway;

    #[async_trait]
    impl ProductGateway for FakeGateway {
        async fn search_by_title(&self, title: &str) -> Result<Vec<Product>> {
            let all = vec![
                Product {
                    id: 1,
                    title: "Red mug".to_string(),
                    price: 9.5,
                    image: None,
                },
                Product {
                    id: 2,
                    title: "Blue mug".to_string(),
                    price: 11.0,
                    image: None,
                },
                Product {
                    id: 3,
                    title: "Poster".to_string(),
                    price: 4.0,
                    image: None,
                },
            ];
            Ok(all.into_iter().filter(|p| p.title.contains(title)).collect())
        }
    }

    #[test]
    fn search_replaces_the_cache_wholesale() {
        tokio_test::block_on(async {
            let catalog = ProductCatalog::new(FakeGateway);

            catalog.search("mug").await.unwrap();
            assert_eq!(catalog.products().len(), 2);

            catalog.search("Poster").await.unwrap();
            let products = catalog.products();
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].id, 3);
        });
    }

    #[test]
    fn empty_title_lists_everything() {
        tokio_test::block_on(async {
            let catalog = ProductCatalog::new(FakeGateway);
            catalog.search("").await.unwrap();
            assert_eq!(catalog.products().len(), 3);
        });
    }
}
