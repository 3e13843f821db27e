use crate::domain::cart::{Cart, CartItem};
use crate::domain::event::CartEvent;
use crate::domain::ports::{CartStore, CartSubscription};
use crate::domain::product::{Product, ProductId};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

/// How many unread events a subscriber may fall behind before it lags.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// A thread-safe in-memory cart store.
///
/// Uses `Arc<RwLock<Cart>>` so clones share the same cart. Each mutation holds
/// the write lock for its whole read-modify-write; readers clone under the read
/// lock. Changes are broadcast before the write lock is released, so
/// subscribers see events in commit order.
#[derive(Clone)]
pub struct InMemoryCartStore {
    cart: Arc<RwLock<Cart>>,
    events: broadcast::Sender<CartEvent>,
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl InMemoryCartStore {
    /// Creates a new, empty cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose subscribers may buffer `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_cart(Cart::new(), capacity)
    }

    /// Re-hydrates a store from a previously serialized item sequence.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        Self::from_cart(Cart::from_items(items), DEFAULT_EVENT_CAPACITY)
    }

    pub fn from_cart(cart: Cart, capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self {
            cart: Arc::new(RwLock::new(cart)),
            events,
        }
    }

    // Every mutation leaves the cart valid at each step, so a panic elsewhere
    // while holding the lock cannot leave it torn.
    fn read(&self) -> RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate(&self, change: impl FnOnce(&mut Cart) -> Option<CartEvent>) {
        let mut cart = self.write();
        if let Some(event) = change(&mut cart) {
            tracing::debug!(?event, "Cart changed");
            // `send` never blocks. No subscribers is fine.
            let _ = self.events.send(event);
        }
    }
}

impl CartStore for InMemoryCartStore {
    fn add_item(&self, product: &Product) {
        self.mutate(|cart| cart.add_item(product));
    }

    fn remove_item(&self, id: ProductId) {
        self.mutate(|cart| cart.remove_item(id));
    }

    fn update_quantity(&self, id: ProductId, new_quantity: i64) {
        self.mutate(|cart| cart.update_quantity(id, new_quantity));
    }

    fn clear(&self) {
        self.mutate(Cart::clear);
    }

    fn items(&self) -> Vec<CartItem> {
        self.read().items().to_vec()
    }

    fn snapshot(&self) -> Cart {
        self.read().clone()
    }

    fn subscribe(&self) -> CartSubscription {
        CartSubscription::new(self.events.subscribe())
    }
}
