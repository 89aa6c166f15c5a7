//! Storefront Command Wrappers
//!
//! Browser bindings to the server's cart endpoints.

mod cart;

pub use cart::FetchCartApi;
