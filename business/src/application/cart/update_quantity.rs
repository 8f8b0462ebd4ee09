use async_trait::async_trait;

use crate::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};

use super::store::CartStore;

#[async_trait]
impl UpdateQuantityUseCase for CartStore {
    async fn execute(&self, params: UpdateQuantityParams) {
        self.logger.info(&format!(
            "Setting quantity of product {} to {}",
            params.product_id, params.quantity
        ));

        let mut cart = self.cart.write().await;
        if !cart.set_quantity(params.product_id, params.quantity) {
            self.logger.debug(&format!(
                "Product {} not in cart, nothing to update",
                params.product_id
            ));
        }
        self.persist(&cart).await;
    }
}
