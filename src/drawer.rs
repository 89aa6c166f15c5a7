//! Drawer Bootstrap
//!
//! Finds the drawer markup, builds the controller and binds the listeners.
//! Pages without the drawer, or browsers without fetch/FormData/Intl, are
//! left alone.

use std::cell::RefCell;
use std::rc::Rc;

use cart_drawer_core::{CartPipeline, DrawerConfig, DrawerController, SharedDrawer};
use js_sys::Reflect;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::commands::FetchCartApi;
use crate::dom::{DomView, DrawerAnchors};
use crate::events;
use crate::intl::IntlMoney;

/// Browser features the drawer cannot work without
const REQUIRED_GLOBALS: [&str; 3] = ["fetch", "FormData", "Intl"];

fn host_supports_drawer(window: &Window) -> bool {
    REQUIRED_GLOBALS
        .iter()
        .all(|name| Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false))
}

/// Initialize now, or on `DOMContentLoaded` while the document is still loading
pub fn init_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    if document.ready_state() != "loading" {
        init_cart_drawer();
        return;
    }
    let on_ready = Closure::once_into_js(init_cart_drawer);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        error!("could not wait for DOMContentLoaded: {:?}", err);
    }
}

pub fn init_cart_drawer() {
    let Some(window) = web_sys::window() else { return };
    if !host_supports_drawer(&window) {
        info!("fetch, FormData or Intl unavailable, leaving cart links as plain navigation");
        return;
    }
    let Some(document) = window.document() else { return };
    let Some(anchors) = DrawerAnchors::find(&document) else {
        debug!("no cart drawer on this page");
        return;
    };

    let config = DrawerConfig::from_currency_attr(anchors.currency().as_deref());
    let money = IntlMoney::new(&config.currency);
    let close_fallback_ms = u32::try_from(config.close_fallback.as_millis()).unwrap_or(u32::MAX);

    let view_window = window.clone();
    let view_document = document.clone();
    let drawer: SharedDrawer<DomView> = Rc::new_cyclic(move |weak| {
        let view = DomView::new(view_window, view_document, anchors, close_fallback_ms, weak.clone());
        RefCell::new(DrawerController::new(view, Box::new(money), config))
    });

    let pipeline = Rc::new(CartPipeline::new(FetchCartApi::new(window), drawer));
    match events::bind(&document, pipeline) {
        Ok(()) => debug!("cart drawer ready"),
        Err(err) => error!("binding cart drawer listeners failed: {:?}", err),
    }
}
