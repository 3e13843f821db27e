use super::cart::CartItem;
use super::product::{Product, ProductId};
use crate::error::{CartError, Result};
use std::collections::HashMap;

/// The read-only, ordered collection of purchasable products.
///
/// Product order is the order the catalog was supplied in; recommendations are
/// produced in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id(), position).is_some() {
                return Err(CartError::ValidationError(format!(
                    "Duplicate product id {} in catalog",
                    product.id()
                )));
            }
        }
        Ok(Self { products, index })
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Re-resolves previously saved cart lines against this catalog.
    ///
    /// Lines take the catalog's current product record, so prices follow the
    /// catalog. Lines whose product is no longer listed are dropped.
    pub fn refresh(&self, items: impl IntoIterator<Item = CartItem>) -> Vec<CartItem> {
        items
            .into_iter()
            .filter_map(|item| match self.get(item.id()) {
                Some(product) => Some(CartItem {
                    product: product.clone(),
                    quantity: item.quantity,
                }),
                None => {
                    tracing::warn!(product = %item.id(), "Dropping cart line missing from the catalog");
                    None
                }
            })
            .collect()
    }
}
