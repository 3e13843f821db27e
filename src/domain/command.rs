use super::product::ProductId;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Add,
    Remove,
    Update,
    Clear,
}

/// One step of a scripted shopping session.
///
/// `product` is required for every action except `clear`, and `quantity` only
/// for `update`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CartCommand {
    pub action: CartAction,
    pub product: Option<ProductId>,
    pub quantity: Option<i64>,
}

impl CartCommand {
    pub fn add(product: ProductId) -> Self {
        Self {
            action: CartAction::Add,
            product: Some(product),
            quantity: None,
        }
    }

    pub fn remove(product: ProductId) -> Self {
        Self {
            action: CartAction::Remove,
            product: Some(product),
            quantity: None,
        }
    }

    pub fn update(product: ProductId, quantity: i64) -> Self {
        Self {
            action: CartAction::Update,
            product: Some(product),
            quantity: Some(quantity),
        }
    }

    pub fn clear() -> Self {
        Self {
            action: CartAction::Clear,
            product: None,
            quantity: None,
        }
    }
}
