//! Error types for lumiere

use thiserror::Error;

use crate::catalog::ProductId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),
}
