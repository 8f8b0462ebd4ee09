use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct AddItemParams {
    pub product_id: u64,
    pub name: String,
    pub unit_price: Decimal,
    pub image: Option<String>,
    /// Quantity to add. Zero is ignored defensively.
    pub quantity: u32,
}

/// Adds a product to the cart, merging quantities when the product is
/// already present. Invalid product data is logged and ignored; it is never
/// surfaced as an error.
#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams);
}
