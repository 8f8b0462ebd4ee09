use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::Cart;

/// Checkout pricing knobs applied on top of the cart subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Percentage taken off the subtotal, e.g. `5` for a 5% discount.
    pub discount_percent: Decimal,
    /// Flat shipping cost added to a non-empty order.
    pub shipping_cost: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            discount_percent: Decimal::new(5, 0),
            shipping_cost: Decimal::new(10, 0),
        }
    }
}

/// Checkout amounts derived from the current line items.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub shipping_cost: Decimal,
    pub grand_total: Decimal,
}

impl OrderSummary {
    /// Computes the summary for a cart. An empty cart yields an all-zero
    /// summary: shipping is only charged once there is something to ship.
    pub fn for_cart(cart: &Cart, policy: &PricingPolicy) -> Self {
        if cart.is_empty() {
            return Self {
                subtotal: Decimal::ZERO,
                discount_amount: Decimal::ZERO,
                shipping_cost: Decimal::ZERO,
                grand_total: Decimal::ZERO,
            };
        }

        let subtotal = cart.total_price();
        let discount_amount = subtotal * policy.discount_percent / Decimal::ONE_HUNDRED;
        let grand_total = subtotal - discount_amount + policy.shipping_cost;

        Self {
            subtotal,
            discount_amount,
            shipping_cost: policy.shipping_cost,
            grand_total,
        }
    }
}
