use async_trait::async_trait;

use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};

use super::store::CartStore;

#[async_trait]
impl RemoveItemUseCase for CartStore {
    async fn execute(&self, params: RemoveItemParams) {
        let mut cart = self.cart.write().await;
        if cart.remove(params.product_id) {
            self.logger
                .info(&format!("Removed product {} from cart", params.product_id));
        } else {
            self.logger.debug(&format!(
                "Product {} not in cart, nothing to remove",
                params.product_id
            ));
        }
        self.persist(&cart).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartItem};
    use crate::domain::cart::repository::CartRepository;
    use crate::domain::errors::RepositoryError;
    use crate::domain::logger::Logger;
    use mockall::mock;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Option<Vec<CartItem>>, RepositoryError>;
            async fn save(&self, items: &[CartItem]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn widget(product_id: u64) -> CartItem {
        CartItem::new(
            product_id,
            "Widget".to_string(),
            Decimal::new(999, 2),
            2,
            None,
        )
        .unwrap()
    }

    async fn seeded_store(mock_repo: MockCartRepo, items: Vec<CartItem>) -> CartStore {
        let store = CartStore::new(Arc::new(mock_repo), mock_logger());
        *store.cart.write().await = Cart::from_items(items).unwrap();
        store
    }

    #[tokio::test]
    async fn should_remove_line_item_and_persist() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .withf(|items: &[CartItem]| items.len() == 1 && items[0].product_id == 2)
            .times(1)
            .returning(|_| Ok(()));

        let store = seeded_store(mock_repo, vec![widget(1), widget(2)]).await;
        store.execute(RemoveItemParams { product_id: 1 }).await;

        let cart = store.cart.read().await;
        assert!(!cart.contains(1));
        assert!(cart.contains(2));
    }

    #[tokio::test]
    async fn should_leave_state_unchanged_when_product_absent() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let store = seeded_store(mock_repo, vec![widget(1)]).await;
        store.execute(RemoveItemParams { product_id: 42 }).await;

        let cart = store.cart.read().await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_item_count(), 2);
    }
}
