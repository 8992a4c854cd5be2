use crate::core::cart::{cart_total, CartService};
use crate::core::catalog::ProductCatalog;
use crate::domain::model::CartItem;
use crate::domain::ports::{CartItemGateway, NewsGateway, ProductGateway};
use crate::utils::error::{Result, StoreError};

/// Front-end driver. Wires the cart and catalog caches to their gateways and
/// renders each storefront view to stdout.
pub struct Storefront<C, P, N>
where
    C: CartItemGateway,
    P: ProductGateway,
    N: NewsGateway,
{
    cart: CartService<C>,
    catalog: ProductCatalog<P>,
    news: N,
}

impl<C, P, N> Storefront<C, P, N>
where
    C: CartItemGateway,
    P: ProductGateway,
    N: NewsGateway,
{
    pub fn new(cart_gateway: C, product_gateway: P, news_gateway: N) -> Self {
        Self {
            cart: CartService::new(cart_gateway),
            catalog: ProductCatalog::new(product_gateway),
            news: news_gateway,
        }
    }

    pub fn cart(&self) -> &CartService<C> {
        &self.cart
    }

    pub fn catalog(&self) -> &ProductCatalog<P> {
        &self.catalog
    }

    /// The storefront page: news banner on top, then the product listing
    /// filtered by title. A broken banner does not block browsing.
    pub async fn browse(&self, title: &str) -> Result<()> {
        if let Err(e) = self.show_news().await {
            tracing::warn!("News banner unavailable: {}", e);
        }

        self.catalog.search(title).await?;
        let products = self.catalog.products();

        if products.is_empty() {
            println!("No products match {:?}", title);
            return Ok(());
        }

        println!("Products:");
        for product in &products {
            println!(
                "  [{}] {} (${:.2})",
                product.id, product.title, product.price
            );
        }
        Ok(())
    }

    /// Fetches the cart, lists its items and prints the total.
    pub async fn show_cart(&self) -> Result<()> {
        self.cart.refresh().await?;
        let items = self.cart.items();

        if items.is_empty() {
            println!("Your cart is empty.");
        } else {
            println!("Cart:");
            for item in &items {
                println!(
                    "  [{}] {} (${:.2})",
                    item.id, item.product.title, item.product.price
                );
            }
        }
        println!("Total: ${:.2}", cart_total(&items));
        Ok(())
    }

    /// Adds a product to the cart by product id. There is no single-product
    /// endpoint, so this lists the full catalog and picks the id out of it.
    pub async fn add_to_cart(&self, product_id: i64) -> Result<CartItem> {
        self.catalog.search("").await?;
        let product = self
            .catalog
            .products()
            .into_iter()
            .find(|p| p.id == product_id)
            .ok_or(StoreError::ProductNotFoundError { id: product_id })?;

        let created = self.cart.add(&product).await?;
        println!(
            "Added {} to cart (cart item {})",
            created.product.title, created.id
        );
        Ok(created)
    }

    pub async fn remove_from_cart(&self, cart_item_id: i64) -> Result<()> {
        self.cart.refresh().await?;
        self.cart.remove(cart_item_id).await?;
        println!("Removed cart item {}", cart_item_id);
        println!("Total: ${:.2}", cart_total(&self.cart.items()));
        Ok(())
    }

    pub async fn show_news(&self) -> Result<()> {
        let news = self.news.list().await?;
        for entry in &news {
            println!("  ** {}", entry.image);
        }
        Ok(())
    }
}
