use async_trait::async_trait;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemRecord;
use crate::slot::FileSlotStore;

/// Slot key holding the serialized cart blob.
pub const CART_SLOT_KEY: &str = "cart";

pub struct CartRepositoryFile {
    slot: FileSlotStore,
}

impl CartRepositoryFile {
    pub fn new(slot: FileSlotStore) -> Self {
        Self { slot }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryFile {
    async fn load(&self) -> Result<Option<Vec<CartItem>>, RepositoryError> {
        let Some(blob) = self
            .slot
            .get(CART_SLOT_KEY)
            .await
            .map_err(|_| RepositoryError::ReadFailed)?
        else {
            return Ok(None);
        };

        let records: Vec<CartItemRecord> =
            serde_json::from_str(&blob).map_err(|_| RepositoryError::Corrupted)?;

        let items = records
            .into_iter()
            .map(CartItemRecord::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(items))
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), RepositoryError> {
        let records: Vec<CartItemRecord> =
            items.iter().map(CartItemRecord::from_domain).collect();
        let blob =
            serde_json::to_string(&records).map_err(|_| RepositoryError::WriteFailed)?;

        self.slot
            .set(CART_SLOT_KEY, &blob)
            .await
            .map_err(|_| RepositoryError::WriteFailed)
    }
}
