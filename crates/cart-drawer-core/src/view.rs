//! Drawer View Seam
//!
//! Everything the controller needs from the page. The browser implementation
//! lives in the UI crate; tests use a recording fake.

use crate::domain::DrawerResult;
use crate::render::RenderPlan;
use crate::visibility::{CloseTicket, CollapseSignal};

pub trait DrawerView {
    /// Handle to a focusable element
    type Focus;
    /// Handle to the button that submitted an add-to-cart form
    type Submitter;

    /// Element focused right now, if any
    fn active_element(&self) -> Option<Self::Focus>;
    fn focus(&mut self, target: &Self::Focus);
    fn focus_close_control(&mut self);

    /// Visible and interactive, panel slid in
    fn show(&mut self);
    /// Non-interactive, panel sliding out
    fn collapse(&mut self);
    /// Fully hidden once the collapse has finished
    fn hide(&mut self);

    /// Attach or detach the Escape key listener
    fn listen_for_escape(&mut self, listen: bool);

    /// Arrange for both completion paths (transition end and fallback timer)
    /// to report `ticket` back to the controller.
    fn await_collapse(&mut self, ticket: CloseTicket);
    /// Tear down whatever completion path did not fire
    fn collapse_settled(&mut self, via: CollapseSignal);

    /// Apply a plan. Fails with `MissingDomAnchor` without touching anything
    /// when a required target is absent.
    fn paint(&mut self, plan: &RenderPlan) -> DrawerResult<()>;

    fn set_line_loading(&mut self, key: &str, loading: bool);
    fn set_submitter_busy(&mut self, submitter: &Self::Submitter, busy: bool);

    /// Full-page navigation
    fn navigate(&mut self, url: &str);
}
