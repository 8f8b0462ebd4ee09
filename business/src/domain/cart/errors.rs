#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.name_empty")]
    NameEmpty,
    #[error("cart.negative_price")]
    NegativePrice,
    #[error("cart.zero_quantity")]
    ZeroQuantity,
    #[error("cart.duplicate_line_item")]
    DuplicateLineItem,
}
