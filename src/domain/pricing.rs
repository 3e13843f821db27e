use super::cart::CartItem;
use super::money::Money;
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAX_RATE: Decimal = dec!(0.05);
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Decimal = dec!(100);
pub const DEFAULT_FLAT_SHIPPING: Decimal = dec!(10);

/// Totals derived from the cart contents.
///
/// Never stored next to the cart; recompute it from the current items whenever
/// it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Tax and shipping rules applied to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Flat tax rate applied to the subtotal, as a fraction.
    pub tax_rate: Decimal,
    /// Shipping is waived when the subtotal is strictly above this amount.
    pub free_shipping_threshold: Money,
    pub flat_shipping: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            free_shipping_threshold: Money::new(DEFAULT_FREE_SHIPPING_THRESHOLD),
            flat_shipping: Money::new(DEFAULT_FLAT_SHIPPING),
        }
    }
}

impl PricingPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(CartError::ValidationError(format!(
                "Tax rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        if self.free_shipping_threshold < Money::ZERO || self.flat_shipping < Money::ZERO {
            return Err(CartError::ValidationError(
                "Shipping amounts must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_shipping_threshold {
            Money::ZERO
        } else {
            self.flat_shipping
        }
    }

    pub fn summarize(&self, items: &[CartItem]) -> OrderSummary {
        let subtotal: Money = items.iter().map(CartItem::line_total).sum();
        let tax = subtotal * self.tax_rate;
        let shipping = self.shipping_for(subtotal);

        OrderSummary {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}

/// Computes the order summary with the storefront's standard rates.
pub fn compute_summary(items: &[CartItem]) -> OrderSummary {
    PricingPolicy::default().summarize(items)
}
