pub mod slot;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
