use async_trait::async_trait;

use crate::domain::cart::use_cases::get_cart::{CartView, GetCartUseCase};

use super::store::CartStore;

#[async_trait]
impl GetCartUseCase for CartStore {
    async fn execute(&self) -> CartView {
        let cart = self.cart.read().await;
        CartView {
            items: cart.items().to_vec(),
            total_item_count: cart.total_item_count(),
            total_price: cart.total_price(),
        }
    }
}
