//! Drawer Errors

use std::fmt;

use thiserror::Error;

/// Result type for drawer operations
pub type DrawerResult<T> = Result<T, DrawerError>;

/// The three calls the drawer makes against the cart API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Read,
    Add,
    Change,
}

impl CartOperation {
    pub fn endpoint(self) -> &'static str {
        match self {
            CartOperation::Read => "/cart.js",
            CartOperation::Add => "/cart/add.js",
            CartOperation::Change => "/cart/change.js",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            CartOperation::Read => "GET",
            CartOperation::Add | CartOperation::Change => "POST",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.endpoint())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawerError {
    #[error("{operation} returned HTTP {status}")]
    HttpStatus { operation: CartOperation, status: u16 },

    #[error("{operation} failed: {message}")]
    Network { operation: CartOperation, message: String },

    #[error("{operation} returned invalid JSON: {message}")]
    InvalidJson { operation: CartOperation, message: String },

    #[error("malformed cart payload: {0}")]
    MalformedCartPayload(String),

    #[error("drawer markup is missing {0}")]
    MissingDomAnchor(&'static str),
}

#[cfg(test)]
impl DrawerError {
    /// Failures of the network call itself, as opposed to rendering problems
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            DrawerError::HttpStatus { .. } | DrawerError::Network { .. } | DrawerError::InvalidJson { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DrawerError::HttpStatus { operation: CartOperation::Change, status: 422 };
        assert_eq!(err.to_string(), "POST /cart/change.js returned HTTP 422");
        assert!(err.is_fetch_failure());
        assert!(!DrawerError::MissingDomAnchor("subtotal").is_fetch_failure());
    }
}
