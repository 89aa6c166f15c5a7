//! Request Pipeline
//!
//! Sequences the cart calls behind each interaction and owns the failure
//! policy: add and change fall back to the full cart page, refresh reports
//! the error to its caller.
//!
//! Requests are never cancelled or sequenced against each other. Two changes
//! to the same line race and whichever response resolves last is painted.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::api::{CartApi, ChangeLine};
use crate::controller::DrawerController;
use crate::domain::{CartPayload, DrawerResult};
use crate::router::QuantityChange;
use crate::view::DrawerView;

/// Controller shared between event handlers and in-flight requests.
/// Borrows are never held across an `.await`.
pub type SharedDrawer<V> = Rc<RefCell<DrawerController<V>>>;

pub struct CartPipeline<A: CartApi, V: DrawerView> {
    api: A,
    drawer: SharedDrawer<V>,
}

impl<A: CartApi, V: DrawerView> CartPipeline<A, V> {
    pub fn new(api: A, drawer: SharedDrawer<V>) -> Self {
        Self { api, drawer }
    }

    pub fn drawer(&self) -> &SharedDrawer<V> {
        &self.drawer
    }

    /// Fetch and paint the current cart
    pub async fn refresh(&self) -> DrawerResult<()> {
        let payload = self.api.read_cart().await?;
        self.drawer.borrow_mut().render_payload(&payload);
        Ok(())
    }

    /// Open without a payload, then paint a fresh cart. The drawer stays open
    /// with its previous contents if the fetch fails.
    pub async fn open_fresh(&self) -> DrawerResult<()> {
        self.drawer.borrow_mut().open(None);
        let result = self.refresh().await;
        self.drawer.borrow_mut().settle_open();
        result
    }

    /// Add → refetch → open. Any failure closes the drawer and navigates away.
    pub async fn add_to_cart(&self, form: &A::Form, submitter: Option<V::Submitter>) {
        if let Some(button) = &submitter {
            self.drawer.borrow_mut().view_mut().set_submitter_busy(button, true);
        }

        let outcome = self.add_then_read(form).await;

        let mut drawer = self.drawer.borrow_mut();
        if let Some(button) = &submitter {
            drawer.view_mut().set_submitter_busy(button, false);
        }
        match outcome {
            Ok(payload) => {
                debug!("added to cart, opening drawer");
                drawer.open(Some(&payload));
            }
            Err(err) => {
                warn!("add to cart failed, falling back to cart page: {}", err);
                drawer.close();
                let page = drawer.config().cart_page;
                drawer.view_mut().navigate(page);
            }
        }
    }

    async fn add_then_read(&self, form: &A::Form) -> DrawerResult<CartPayload> {
        self.api.add_items(form).await?;
        self.api.read_cart().await
    }

    /// Post the next quantity for one line and paint the returned cart
    pub async fn change_quantity(&self, change: &QuantityChange) {
        self.drawer.borrow_mut().view_mut().set_line_loading(&change.key, true);

        let body = ChangeLine { id: &change.key, quantity: change.next_quantity() };
        let outcome = self.api.change_line(&body).await;

        let mut drawer = self.drawer.borrow_mut();
        match outcome {
            Ok(payload) => {
                // A painted cart replaces the row; anything else leaves it behind
                if !drawer.render_payload(&payload) {
                    drawer.view_mut().set_line_loading(&change.key, false);
                }
            }
            Err(err) => {
                warn!("quantity change for {} failed, falling back to cart page: {}", change.key, err);
                drawer.view_mut().set_line_loading(&change.key, false);
                let page = drawer.config().cart_page;
                drawer.view_mut().navigate(page);
            }
        }
    }
}
