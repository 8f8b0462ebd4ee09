use async_trait::async_trait;

use crate::domain::cart::pricing::OrderSummary;

/// Derives the checkout summary (subtotal, discount, shipping, grand total)
/// for the current cart.
#[async_trait]
pub trait GetOrderSummaryUseCase: Send + Sync {
    async fn execute(&self) -> OrderSummary;
}
