//! Runtime settings for a shopping session.

use crate::domain::pricing::PricingPolicy;
use crate::domain::recommendation::DEFAULT_RECOMMENDATION_LIMIT;
use crate::error::{CartError, Result};
use crate::infrastructure::in_memory::DEFAULT_EVENT_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartConfig {
    pub pricing: PricingPolicy,
    /// Maximum number of products suggested at once.
    pub recommendation_limit: usize,
    /// Buffered events per cart subscriber.
    pub event_capacity: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            pricing: PricingPolicy::default(),
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl CartConfig {
    pub fn validate(&self) -> Result<()> {
        self.pricing.validate()?;
        if self.event_capacity == 0 {
            return Err(CartError::ValidationError(
                "Event capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
