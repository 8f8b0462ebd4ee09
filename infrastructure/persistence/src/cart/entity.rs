use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;
use business::domain::errors::RepositoryError;

/// Persisted shape of one cart line item.
///
/// Field names are pinned to the stored JSON layout (`productId`, `name`,
/// `price`, `quantity`, optional `imgName`). Any unknown field, missing
/// field, or type mismatch fails deserialization, and the whole blob is then
/// treated as corrupt.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CartItemRecord {
    pub product_id: u64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_name: Option<String>,
}

impl CartItemRecord {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name.clone(),
            price: item.unit_price,
            quantity: item.quantity,
            img_name: item.image.clone(),
        }
    }

    /// Converts a stored record into a domain line item, re-validating the
    /// domain invariants (non-empty name, price ≥ 0, quantity ≥ 1).
    pub fn into_domain(self) -> Result<CartItem, RepositoryError> {
        CartItem::new(
            self.product_id,
            self.name,
            self.price,
            self.quantity,
            self.img_name,
        )
        .map_err(|_| RepositoryError::Corrupted)
    }
}
