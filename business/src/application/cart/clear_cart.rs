use async_trait::async_trait;

use crate::domain::cart::use_cases::clear_cart::ClearCartUseCase;

use super::store::CartStore;

#[async_trait]
impl ClearCartUseCase for CartStore {
    async fn execute(&self) {
        self.logger.info("Clearing cart");

        let mut cart = self.cart.write().await;
        cart.clear();
        self.persist(&cart).await;
    }
}
