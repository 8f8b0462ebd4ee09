use async_trait::async_trait;

pub struct UpdateQuantityParams {
    pub product_id: u64,
    /// Requested quantity. Zero or less removes the line item.
    pub quantity: i32,
}

/// Sets the quantity of an existing line item. A quantity of zero or less
/// behaves exactly like removal; an absent product is a no-op.
#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams);
}
