use crate::config::CartConfig;
use crate::domain::cart::CartItem;
use crate::domain::catalog::Catalog;
use crate::domain::command::{CartAction, CartCommand};
use crate::domain::ports::{CartStoreBox, CartSubscription};
use crate::domain::pricing::OrderSummary;
use crate::domain::product::{Product, ProductId};
use crate::domain::recommendation::recommend;
use crate::error::{CartError, Result};
use serde::Serialize;
use std::sync::Arc;

/// Everything a storefront renders for the cart, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub summary: OrderSummary,
    pub recommendations: Vec<Product>,
}

impl CartView {
    /// Number of distinct lines, as shown on the cart badge.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}

/// One shopper's session: a cart store paired with the catalog.
///
/// The session is constructed explicitly at session start and consumed by
/// `into_view` at the end. It holds no derived state; totals and suggestions
/// are recomputed from the store on every `view` call.
pub struct ShoppingSession {
    store: CartStoreBox,
    catalog: Arc<Catalog>,
    config: CartConfig,
}

impl ShoppingSession {
    /// Creates a new `ShoppingSession`.
    ///
    /// # Arguments
    ///
    /// * `store` - The cart state manager backing this session.
    /// * `catalog` - The read-only catalog, shareable between sessions.
    /// * `config` - Pricing and recommendation settings.
    pub fn new(store: CartStoreBox, catalog: Arc<Catalog>, config: CartConfig) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Adds one unit of the catalog product `id`.
    pub fn add_product(&self, id: ProductId) -> Result<()> {
        let product = self
            .catalog
            .get(id)
            .ok_or(CartError::ProductNotFound(id))?;
        self.store.add_item(product);
        Ok(())
    }

    pub fn remove_product(&self, id: ProductId) {
        self.store.remove_item(id);
    }

    pub fn update_quantity(&self, id: ProductId, new_quantity: i64) {
        self.store.update_quantity(id, new_quantity);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Executes one scripted command.
    pub fn apply(&self, command: CartCommand) -> Result<()> {
        let product = || {
            command.product.ok_or_else(|| {
                CartError::ValidationError(format!("{:?} requires a product", command.action))
            })
        };

        match command.action {
            CartAction::Add => self.add_product(product()?)?,
            CartAction::Remove => self.remove_product(product()?),
            CartAction::Update => {
                let id = product()?;
                let quantity = command.quantity.ok_or_else(|| {
                    CartError::ValidationError("Update requires a quantity".to_string())
                })?;
                self.update_quantity(id, quantity);
            }
            CartAction::Clear => self.clear(),
        }
        Ok(())
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.store.items()
    }

    pub fn subscribe(&self) -> CartSubscription {
        self.store.subscribe()
    }

    pub fn summary(&self) -> OrderSummary {
        self.config.pricing.summarize(self.store.snapshot().items())
    }

    pub fn recommendations(&self) -> Vec<Product> {
        let cart = self.store.snapshot();
        recommend(cart.items(), &self.catalog, self.config.recommendation_limit)
    }

    /// Derives items, totals and suggestions from a single snapshot of the cart.
    pub fn view(&self) -> CartView {
        let cart = self.store.snapshot();
        let summary = self.config.pricing.summarize(cart.items());
        let recommendations =
            recommend(cart.items(), &self.catalog, self.config.recommendation_limit);

        CartView {
            items: cart.into(),
            summary,
            recommendations,
        }
    }

    /// Ends the session and returns the final state of the cart.
    pub fn into_view(self) -> CartView {
        self.view()
    }
}
