//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product record violates a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Two catalog records share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Checkout requires a signed-in customer.
    #[error("Sign in to check out")]
    NotAuthenticated,

    /// Checkout requires at least one cart item.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Required checkout fields are blank.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while loading catalog data.
    #[error("I/O error: {0}")]
    Io(String),
}

impl CommerceError {
    /// Whether the error is a user-correctable validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::CheckoutIncomplete(_) | CommerceError::InvalidProduct { .. }
        )
    }
}

impl From<shop_cache::CacheError> for CommerceError {
    fn from(e: shop_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::Io(e.to_string())
    }
}
