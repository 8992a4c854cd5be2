pub mod cart;
pub mod catalog;
pub mod storefront;

pub use crate::domain::model::{CartItem, News, Product};
pub use crate::domain::ports::{CartItemGateway, ConfigProvider, NewsGateway, ProductGateway};
pub use crate::utils::error::Result;
