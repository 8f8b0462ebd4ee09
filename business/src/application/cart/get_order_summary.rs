use async_trait::async_trait;

use crate::domain::cart::pricing::OrderSummary;
use crate::domain::cart::use_cases::get_order_summary::GetOrderSummaryUseCase;

use super::store::CartStore;

#[async_trait]
impl GetOrderSummaryUseCase for CartStore {
    async fn execute(&self) -> OrderSummary {
        let cart = self.cart.read().await;
        OrderSummary::for_cart(&cart, &self.pricing)
    }
}
