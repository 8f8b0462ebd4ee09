use async_trait::async_trait;

/// Hydrates the cart once from the durable slot. A missing slot starts an
/// empty cart; corrupt stored data is logged and also starts an empty cart.
/// Never surfaces a failure to the caller.
#[async_trait]
pub trait InitializeCartUseCase: Send + Sync {
    async fn execute(&self);
}
