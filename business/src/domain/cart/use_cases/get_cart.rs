use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::cart::model::CartItem;

/// Snapshot of the cart for rendering: the line-item sequence plus both
/// derived totals, recomputed from the line items on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total_item_count: u64,
    pub total_price: Decimal,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> CartView;
}
