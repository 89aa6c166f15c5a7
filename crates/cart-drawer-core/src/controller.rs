//! Drawer Controller
//!
//! Owns the [`DrawerState`], the view and the money formatter. All mutation
//! of open/closed state and of the painted cart goes through here.

use log::debug;

use crate::config::DrawerConfig;
use crate::domain::{Cart, CartPayload};
use crate::money::MoneyFormat;
use crate::render::RenderPlan;
use crate::view::DrawerView;
use crate::visibility::{CloseTicket, CollapseSignal, DrawerState, Phase};

pub struct DrawerController<V: DrawerView> {
    state: DrawerState<V::Focus>,
    view: V,
    money: Box<dyn MoneyFormat>,
    config: DrawerConfig,
}

impl<V: DrawerView> DrawerController<V> {
    pub fn new(view: V, money: Box<dyn MoneyFormat>, config: DrawerConfig) -> Self {
        Self {
            state: DrawerState::new(),
            view,
            money,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Open the drawer, painting `payload` first when one is supplied.
    ///
    /// Without a payload the drawer enters `Opening` until
    /// [`settle_open`](Self::settle_open) is called.
    pub fn open(&mut self, payload: Option<&CartPayload>) {
        let focused = self.view.active_element();
        if let Some(payload) = payload {
            self.render_payload(payload);
        }
        self.view.show();
        self.state.open(focused, payload.is_none());
        self.view.focus_close_control();
        self.view.listen_for_escape(true);
        debug!("drawer {:?}", self.state.phase());
    }

    pub fn settle_open(&mut self) {
        if self.state.settle_open() {
            debug!("drawer Open");
        }
    }

    /// Start the collapse. Returns the ticket both completion paths must present.
    pub fn close(&mut self) -> Option<CloseTicket> {
        let ticket = self.state.close()?;
        self.view.listen_for_escape(false);
        self.view.collapse();
        self.view.await_collapse(ticket);
        debug!("drawer Closing ({:?})", ticket);
        Some(ticket)
    }

    /// Finalize a close. Only the first call with a live ticket has any effect.
    pub fn complete_close(&mut self, ticket: CloseTicket, via: CollapseSignal) -> bool {
        let Some(focus) = self.state.finish_close(ticket) else {
            return false;
        };
        self.view.collapse_settled(via);
        self.view.hide();
        if let Some(target) = focus {
            self.view.focus(&target);
        }
        debug!("drawer Closed via {:?}", via);
        true
    }

    /// Finalize whatever close is in flight (used by signals that carry no ticket)
    pub fn complete_pending_close(&mut self, via: CollapseSignal) -> bool {
        match self.state.pending_close() {
            Some(ticket) => self.complete_close(ticket, via),
            None => false,
        }
    }

    /// Returns true when the key was consumed and its default should be prevented
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.state.is_open() {
            return false;
        }
        if key == "Escape" || key == "Esc" {
            self.close();
            return true;
        }
        false
    }

    /// Paint `cart`. Missing markup is absorbed; returns whether anything was painted.
    pub fn render(&mut self, cart: &Cart) -> bool {
        let plan = RenderPlan::for_cart(cart, self.money.as_ref(), self.config.max_rendered_lines);
        match self.view.paint(&plan) {
            Ok(()) => {
                debug!("painted {} of {} lines", plan.line_count(), cart.items.len());
                true
            }
            Err(err) => {
                debug!("render skipped: {}", err);
                false
            }
        }
    }

    /// Like [`render`](Self::render), absorbing payloads that are not a cart
    pub fn render_payload(&mut self, payload: &CartPayload) -> bool {
        match payload.cart() {
            Ok(cart) => self.render(&cart),
            Err(err) => {
                debug!("render skipped: {}", err);
                false
            }
        }
    }
}
