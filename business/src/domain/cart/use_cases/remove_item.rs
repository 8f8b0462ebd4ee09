use async_trait::async_trait;

pub struct RemoveItemParams {
    pub product_id: u64,
}

/// Removes the line item for a product. Removing an absent product is a
/// no-op, not an error.
#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemParams);
}
