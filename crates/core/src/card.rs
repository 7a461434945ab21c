//! View models for product cards and the product detail page.

use serde::Serialize;

use crate::route::Route;
use crate::types::Product;

/// What a product card shows: thumbnail, title, price, and a link to details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    /// First product image; empty when the catalog sent none.
    pub image: String,
    pub price: f64,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            image: product.primary_image().unwrap_or_default().to_string(),
            price: product.price,
        }
    }

    /// Link target for both the thumbnail and the "View Details" button.
    pub fn href(&self) -> String {
        Route::Product(self.id).path()
    }

    pub fn price_label(&self) -> String {
        price_label(self.price)
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self::from_product(product)
    }
}

/// `Price: $299` for whole amounts, `Price: $9.99` otherwise.
pub fn price_label(price: f64) -> String {
    format!("Price: ${price}")
}

/// `4.5 / 5`
pub fn rating_label(rating: f64) -> String {
    format!("{rating} / 5")
}
