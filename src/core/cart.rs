use crate::domain::model::{CartItem, Product};
use crate::domain::ports::CartItemGateway;
use crate::utils::error::Result;
use tokio::sync::watch;

/// Client-side cart cache. Holds the last server response in a watch channel
/// and patches it in place after successful writes, so subscribers see every
/// mutation without a re-fetch.
pub struct CartService<G: CartItemGateway> {
    gateway: G,
    items: watch::Sender<Vec<CartItem>>,
}

impl<G: CartItemGateway> CartService<G> {
    pub fn new(gateway: G) -> Self {
        let (items, _) = watch::channel(Vec::new());
        Self { gateway, items }
    }

    /// Snapshot of the cached cart, in server/local insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.items.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.items.subscribe()
    }

    /// Replaces the whole cache with the server list.
    pub async fn refresh(&self) -> Result<()> {
        let items = self.gateway.list().await?;
        tracing::debug!("Cart refreshed: {} items", items.len());
        self.items.send_replace(items);
        Ok(())
    }

    /// Creates a cart item on the server, then appends the returned item to
    /// the cache. A failed create leaves the cache untouched.
    pub async fn add(&self, product: &Product) -> Result<CartItem> {
        let created = self.gateway.create(product).await?;
        tracing::debug!("Cart item {} created for product {}", created.id, product.id);
        self.items.send_modify(|items| items.push(created.clone()));
        Ok(created)
    }

    /// Deletes a cart item on the server, then filters it out of the cache.
    /// A failed delete leaves the cache untouched.
    pub async fn remove(&self, cart_item_id: i64) -> Result<()> {
        self.gateway.delete(cart_item_id).await?;
        tracing::debug!("Cart item {} deleted", cart_item_id);
        self.items
            .send_modify(|items| items.retain(|item| item.id != cart_item_id));
        Ok(())
    }
}

/// Sum of the embedded product prices. Quantity per line is one.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.product.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StoreError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicI64, Ordering};

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            image: None,
        }
    }

    fn item(id: i64, price: f64) -> CartItem {
        CartItem {
            id,
            product: product(id * 100, price),
        }
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn total_sums_embedded_product_prices() {
        let items = vec![item(1, 10.0), item(2, 5.0)];
        assert_eq!(cart_total(&items), 15.0);

        let after_delete: Vec<CartItem> =
            items.into_iter().filter(|i| i.id != 1).collect();
        assert_eq!(cart_total(&after_delete), 5.0);
    }

    /// In-memory gateway that assigns ids sequentially, or fails every call
    /// when constructed with `failing()`.
    struct FakeGateway {
        next_id: AtomicI64,
        fail: bool,
    }

    impl FakeGateway {
        fn new() -> Self {
            Self {
                next_id: AtomicI64::new(1),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                next_id: AtomicI64::new(1),
                fail: true,
            }
        }

        fn check(&self) -> Result<()> {
            if self.fail {
                return Err(StoreError::ConfigError {
                    message: "gateway down".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CartItemGateway for FakeGateway {
        async fn list(&self) -> Result<Vec<CartItem>> {
            self.check()?;
            Ok(vec![item(1, 10.0), item(2, 5.0)])
        }

        async fn create(&self, product: &Product) -> Result<CartItem> {
            self.check()?;
            Ok(CartItem {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                product: product.clone(),
            })
        }

        async fn delete(&self, _cart_item_id: i64) -> Result<()> {
            self.check()
        }
    }

    #[test]
    fn add_appends_the_created_item() {
        tokio_test::block_on(async {
            let cart = CartService::new(FakeGateway::new());
            let created = cart.add(&product(7, 19.99)).await.unwrap();

            let items = cart.items();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0], created);
            assert_eq!(items[0].product.id, 7);
        });
    }

    #[test]
    fn remove_filters_exactly_one_entry() {
        tokio_test::block_on(async {
            let cart = CartService::new(FakeGateway::new());
            cart.refresh().await.unwrap();
            assert_eq!(cart.items().len(), 2);

            cart.remove(1).await.unwrap();
            let items = cart.items();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, 2);
            assert_eq!(cart_total(&items), 5.0);
        });
    }

    #[test]
    fn failed_calls_leave_the_cache_untouched() {
        tokio_test::block_on(async {
            let cart = CartService::new(FakeGateway::failing());
            assert!(cart.refresh().await.is_err());
            assert!(cart.add(&product(1, 1.0)).await.is_err());
            assert!(cart.remove(1).await.is_err());
            assert!(cart.items().is_empty());
        });
    }

    #[test]
    fn subscribers_observe_mutations() {
        tokio_test::block_on(async {
            let cart = CartService::new(FakeGateway::new());
            let mut rx = cart.subscribe();

            cart.add(&product(3, 2.5)).await.unwrap();
            rx.changed().await.unwrap();
            assert_eq!(rx.borrow().len(), 1);
        });
    }
}
