use async_trait::async_trait;

/// Empties the cart and persists the empty state.
#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self);
}
