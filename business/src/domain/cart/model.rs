use rust_decimal::Decimal;

use super::errors::CartError;

/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: u64,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub image: Option<String>,
}

impl CartItem {
    pub fn new(
        product_id: u64,
        name: String,
        unit_price: Decimal,
        quantity: u32,
        image: Option<String>,
    ) -> Result<Self, CartError> {
        if name.trim().is_empty() {
            return Err(CartError::NameEmpty);
        }

        if unit_price.is_sign_negative() {
            return Err(CartError::NegativePrice);
        }

        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        Ok(Self {
            product_id,
            name,
            unit_price,
            quantity,
            image,
        })
    }

    /// Unit price times quantity for this line.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The cart aggregate. Line items keep insertion order for display, and at
/// most one line item exists per product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuilds a cart from already-persisted line items.
    /// A duplicate product id means the stored data violates the uniqueness
    /// invariant and must be discarded as corrupt.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let mut cart = Self::new();
        for item in items {
            if cart.contains(item.product_id) {
                return Err(CartError::DuplicateLineItem);
            }
            cart.items.push(item);
        }
        Ok(cart)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    /// Adds a line item, merging quantities when the product is already in
    /// the cart. A merged item keeps its original position; a new item is
    /// appended at the end.
    pub fn merge(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    /// Removes the line item for `product_id`. Removing an absent id is a
    /// no-op. Returns whether a line item was removed.
    pub fn remove(&mut self, product_id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    /// Sets the quantity of the line item for `product_id`. A quantity of
    /// zero or less is equivalent to removal; an absent id is a no-op.
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: u64, quantity: i32) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
        {
            Some(item) => {
                item.quantity = quantity as u32;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities over all line items. Derived, never stored.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price times quantity over all line items. Derived, never
    /// stored.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
