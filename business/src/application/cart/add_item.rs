use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};

use super::store::CartStore;

#[async_trait]
impl AddItemUseCase for CartStore {
    async fn execute(&self, params: AddItemParams) {
        let item = match CartItem::new(
            params.product_id,
            params.name,
            params.unit_price,
            params.quantity,
            params.image,
        ) {
            Ok(item) => item,
            Err(e) => {
                self.logger
                    .warn(&format!("Ignoring invalid add to cart: {}", e));
                return;
            }
        };

        self.logger.info(&format!(
            "Adding product {} to cart (quantity {})",
            item.product_id, item.quantity
        ));

        let mut cart = self.cart.write().await;
        cart.merge(item);
        self.persist(&cart).await;
    }
}
