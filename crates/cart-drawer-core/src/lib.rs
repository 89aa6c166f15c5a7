//! Cart Drawer Core
//!
//! Host-independent half of the storefront cart drawer:
//! - domain: cart payloads and errors
//! - visibility: open/close state machine with one-shot close completion
//! - render: cart → formatted rows and subtotal
//! - router: click/submit classification
//! - controller / pipeline: drawer orchestration over the `DrawerView` and
//!   `CartApi` seams

pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod money;
pub mod pipeline;
pub mod render;
pub mod router;
pub mod view;
pub mod visibility;

#[cfg(test)]
mod testing;

pub use api::{CartApi, ChangeLine};
pub use config::{CurrencyCode, DrawerConfig};
pub use controller::DrawerController;
pub use domain::{Cart, CartOperation, CartPayload, DrawerError, DrawerResult, LineItem};
pub use money::MoneyFormat;
pub use pipeline::{CartPipeline, SharedDrawer};
pub use render::{ItemsPlan, LineImage, LineView, RenderPlan};
pub use router::{classify_click, is_cart_add_form, Action, ClickTarget, QuantityChange, QuantityControl};
pub use view::DrawerView;
pub use visibility::{CloseTicket, CollapseSignal, Phase};
