use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::initialize::InitializeCartUseCase;

use super::store::CartStore;

#[async_trait]
impl InitializeCartUseCase for CartStore {
    async fn execute(&self) {
        let hydrated = match self.repository.load().await {
            Ok(Some(items)) => match Cart::from_items(items) {
                Ok(cart) => {
                    self.logger
                        .info(&format!("Hydrated cart with {} line items", cart.len()));
                    Some(cart)
                }
                Err(e) => {
                    self.logger.warn(&format!(
                        "Stored cart violates invariants, starting empty: {}",
                        e
                    ));
                    None
                }
            },
            Ok(None) => {
                self.logger.debug("No stored cart found, starting empty");
                None
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to read stored cart, starting empty: {}", e));
                None
            }
        };

        let mut cart = self.cart.write().await;
        *cart = hydrated.unwrap_or_default();
    }
}
