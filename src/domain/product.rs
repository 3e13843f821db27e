use super::money::Price;
use crate::error::CartError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-wide unique product key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Raw product row as it arrives from a catalog source, before validation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// An immutable catalog record.
///
/// A `Product` can only be obtained through validated construction, so every
/// value in the cart has a name, a category and a non-negative price.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    category: String,
    description: String,
    image: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Result<Self, CartError> {
        let name = name.into();
        let category = category.into();
        if name.trim().is_empty() {
            return Err(CartError::ValidationError(
                "Product name must not be empty".to_string(),
            ));
        }
        if category.trim().is_empty() {
            return Err(CartError::ValidationError(format!(
                "Product '{name}' has no category"
            )));
        }

        Ok(Self {
            id,
            name,
            price: Price::new(price)?,
            category,
            description: String::new(),
            image: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = CartError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(record.id, record.name, record.price, record.category)?
            .with_description(record.description)
            .with_image(record.image))
    }
}
