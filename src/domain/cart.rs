use super::event::CartEvent;
use super::money::Money;
use super::product::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// A product together with the quantity the shopper intends to buy.
///
/// The quantity is a `NonZeroU32`, so a line with zero units cannot exist.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CartItem {
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Money {
        Money::from(self.product.price()) * Decimal::from(self.quantity.get())
    }
}

/// The ordered line items of one shopper's cart.
///
/// Every mutation keeps two invariants: product ids are unique across items,
/// and every stored quantity is at least one. Insertion order is kept for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-hydrates a cart from a previously serialized item sequence.
    ///
    /// Repeated product ids are merged into the first occurrence by summing
    /// their quantities.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            match cart.position(item.id()) {
                Some(position) => {
                    let existing = &mut cart.items[position];
                    existing.quantity = existing.quantity.saturating_add(item.quantity.get());
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Adds one unit of `product`, appending a new line if it is not in the cart yet.
    ///
    /// A line already at `u32::MAX` is left as is and no event is produced.
    pub fn add_item(&mut self, product: &Product) -> Option<CartEvent> {
        let quantity = match self.position(product.id()) {
            Some(position) => {
                let item = &mut self.items[position];
                if item.quantity == NonZeroU32::MAX {
                    return None;
                }
                item.quantity = item.quantity.saturating_add(1);
                item.quantity()
            }
            None => {
                self.items.push(CartItem::new(product.clone()));
                1
            }
        };

        Some(CartEvent::ItemAdded {
            product_id: product.id(),
            name: product.name().to_string(),
            quantity,
        })
    }

    /// Removes the line for `id`. Absent ids are ignored.
    pub fn remove_item(&mut self, id: ProductId) -> Option<CartEvent> {
        let position = self.position(id)?;
        self.items.remove(position);
        Some(CartEvent::ItemRemoved { product_id: id })
    }

    /// Sets the quantity for `id`; anything below one removes the line.
    ///
    /// Absent ids are ignored and quantities beyond `u32::MAX` saturate.
    pub fn update_quantity(&mut self, id: ProductId, new_quantity: i64) -> Option<CartEvent> {
        if new_quantity < 1 {
            return self.remove_item(id);
        }
        let quantity = u32::try_from(new_quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);

        let position = self.position(id)?;
        let item = &mut self.items[position];
        if item.quantity == quantity {
            return None;
        }
        item.quantity = quantity;
        Some(CartEvent::QuantityChanged {
            product_id: id,
            quantity: quantity.get(),
        })
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> Option<CartEvent> {
        if self.items.is_empty() {
            return None;
        }
        self.items.clear();
        Some(CartEvent::Cleared)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
