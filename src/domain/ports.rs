use super::cart::{Cart, CartItem};
use super::event::CartEvent;
use super::product::{Product, ProductId};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// The cart state manager.
///
/// Implementations serialize all mutations behind one exclusion boundary, and
/// readers always observe a whole cart, never one in the middle of a change.
/// None of the operations fail: unknown ids are ignored and quantities below
/// one remove the line.
pub trait CartStore: Send + Sync {
    /// Adds one unit of `product`.
    fn add_item(&self, product: &Product);
    fn remove_item(&self, id: ProductId);
    fn update_quantity(&self, id: ProductId, new_quantity: i64);
    fn clear(&self);
    /// Owned copy of the current line items, in insertion order.
    fn items(&self) -> Vec<CartItem>;
    /// Owned copy of the whole cart, taken at a single point in time.
    fn snapshot(&self) -> Cart;
    /// Receives every change made after this call.
    fn subscribe(&self) -> CartSubscription;
}

pub type CartStoreBox = Box<dyn CartStore>;
pub type CartStoreFactory = Box<dyn Fn() -> CartStoreBox + Send + Sync>;

/// A live feed of cart changes.
pub struct CartSubscription {
    receiver: broadcast::Receiver<CartEvent>,
}

impl CartSubscription {
    pub fn new(receiver: broadcast::Receiver<CartEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next change.
    ///
    /// Returns `None` once the store has been dropped. Events missed because
    /// the subscriber fell behind are skipped.
    pub async fn recv(&mut self) -> Option<CartEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Cart subscriber lagged, skipping events");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next pending change without waiting.
    pub fn try_recv(&mut self) -> Option<CartEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Cart subscriber lagged, skipping events");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}
