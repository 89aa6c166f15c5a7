//! Cart API Seam
//!
//! The storefront's cart endpoints. Implementations decide how requests are
//! sent (browser fetch, in-memory fakes for tests).

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{CartPayload, DrawerResult};

/// JSON body of `POST /cart/change.js`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeLine<'a> {
    pub id: &'a str,
    pub quantity: u32,
}

/// Every call treats a non-success status as a hard failure
#[async_trait(?Send)]
pub trait CartApi {
    /// Form fields of the submitted add-to-cart form
    type Form;

    /// `GET /cart.js`
    async fn read_cart(&self) -> DrawerResult<CartPayload>;

    /// `POST /cart/add.js`; the response body is not used beyond being JSON
    async fn add_items(&self, form: &Self::Form) -> DrawerResult<()>;

    /// `POST /cart/change.js`, answered with the whole cart
    async fn change_line(&self, change: &ChangeLine<'_>) -> DrawerResult<CartPayload>;
}
