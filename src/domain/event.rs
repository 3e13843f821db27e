use super::product::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A change that was applied to a cart.
///
/// Published by the cart store after each mutation that actually changed the
/// cart. Calls that turn out to be no-ops publish nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    ItemAdded {
        product_id: ProductId,
        name: String,
        quantity: u32,
    },
    ItemRemoved {
        product_id: ProductId,
    },
    QuantityChanged {
        product_id: ProductId,
        quantity: u32,
    },
    Cleared,
}

impl CartEvent {
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::ItemAdded { product_id, .. }
            | Self::ItemRemoved { product_id }
            | Self::QuantityChanged { product_id, .. } => Some(*product_id),
            Self::Cleared => None,
        }
    }
}

/// Shopper-facing notice for the change.
impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemAdded { name, .. } => write!(f, "{name} has been added to your cart."),
            Self::ItemRemoved { product_id } => {
                write!(f, "Product {product_id} has been removed from your cart.")
            }
            Self::QuantityChanged {
                product_id,
                quantity,
            } => write!(f, "Product {product_id} quantity set to {quantity}."),
            Self::Cleared => write!(f, "Your cart has been cleared."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_notice_names_product() {
        let event = CartEvent::ItemAdded {
            product_id: ProductId(4),
            name: "Desk Lamp".to_string(),
            quantity: 1,
        };
        assert_eq!(event.to_string(), "Desk Lamp has been added to your cart.");
        assert_eq!(event.product_id(), Some(ProductId(4)));
        assert_eq!(CartEvent::Cleared.product_id(), None);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let json = serde_json::to_string(&CartEvent::ItemRemoved {
            product_id: ProductId(2),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"item_removed","product_id":2}"#);
    }
}
