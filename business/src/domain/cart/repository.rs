use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::CartItem;

/// Durable slot holding the serialized cart. Hydration at session start is
/// the only read path; every mutation overwrites the slot with the complete
/// current state.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Reads the persisted line items. `Ok(None)` means the slot has never
    /// been written; any shape mismatch in stored data is `Corrupted`.
    async fn load(&self) -> Result<Option<Vec<CartItem>>, RepositoryError>;
    /// Overwrites the slot with the complete current state.
    async fn save(&self, items: &[CartItem]) -> Result<(), RepositoryError>;
}
