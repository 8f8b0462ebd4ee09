use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::cart::model::Cart;
use crate::domain::cart::pricing::PricingPolicy;
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;

/// Single source of truth for the shopping cart.
///
/// Owns the in-memory aggregate and writes the complete state to the durable
/// slot after every mutation. A failed write keeps the in-memory state
/// authoritative for the session; durability is lost for that write only.
pub struct CartStore {
    pub(crate) cart: RwLock<Cart>,
    pub(crate) repository: Arc<dyn CartRepository>,
    pub(crate) logger: Arc<dyn Logger>,
    pub(crate) pricing: PricingPolicy,
}

impl CartStore {
    pub fn new(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        Self::with_pricing(repository, logger, PricingPolicy::default())
    }

    pub fn with_pricing(
        repository: Arc<dyn CartRepository>,
        logger: Arc<dyn Logger>,
        pricing: PricingPolicy,
    ) -> Self {
        Self {
            cart: RwLock::new(Cart::new()),
            repository,
            logger,
            pricing,
        }
    }

    /// Writes the given state to the durable slot, absorbing write failures.
    pub(crate) async fn persist(&self, cart: &Cart) {
        if let Err(e) = self.repository.save(cart.items()).await {
            self.logger.error(&format!(
                "Failed to persist cart, in-memory state stays authoritative: {}",
                e
            ));
        }
    }
}
