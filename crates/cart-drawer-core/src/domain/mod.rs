//! Domain Layer
//!
//! Cart entities as the storefront serves them, plus the drawer's error type.
//! This layer has NO host dependencies (only serde for deserialization).

mod cart;
mod error;

pub use cart::{Cart, CartPayload, LineItem};
pub use error::{CartOperation, DrawerError, DrawerResult};
