//! Drawer Markup
//!
//! Marker attributes and utility classes the theme markup provides, the
//! lookup of the drawer's anchors, and the web-sys [`DrawerView`](cart_drawer_core::DrawerView).

mod anchors;
mod view;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod testing;

pub use anchors::DrawerAnchors;
pub use view::DomView;

use web_sys::Element;

pub const DRAWER_ID: &str = "lw-cart-drawer";

pub mod selectors {
    pub const OVERLAY: &str = "[data-cart-drawer-overlay]";
    pub const PANEL: &str = "[data-cart-drawer-panel]";
    pub const ITEMS: &str = "[data-cart-drawer-items]";
    pub const EMPTY: &str = "[data-cart-drawer-empty]";
    pub const SUBTOTAL: &str = "[data-cart-drawer-subtotal]";
    pub const CLOSE: &str = "[data-cart-drawer-close]";
    pub const LINE_TEMPLATE: &str = "[data-cart-drawer-line-template]";
    pub const TRIGGER: &str = "[data-cart-drawer-trigger]";
    pub const QTY_CHANGE: &str = "[data-cart-qty-change]";
    pub const QTY_DECREMENT: &str = "[data-cart-qty-change=\"decrement\"]";
    pub const QTY_INCREMENT: &str = "[data-cart-qty-change=\"increment\"]";
    pub const LINE: &str = "[data-cart-line-key]";
    pub const LINE_IMAGE: &str = "[data-cart-line-image]";
    pub const LINE_TITLE: &str = "[data-cart-line-title]";
    pub const LINE_VARIANT: &str = "[data-cart-line-variant]";
    pub const LINE_QTY: &str = "[data-cart-line-qty]";
    pub const LINE_PRICE: &str = "[data-cart-line-price]";
    pub const LINE_ORIGINAL: &str = "[data-cart-line-original]";
    pub const ADD_SPINNER: &str = "[data-cart-add-spinner]";
}

pub mod attrs {
    pub const CURRENCY: &str = "data-shop-currency";
    pub const LINE_KEY: &str = "data-cart-line-key";
    pub const LOADING: &str = "data-loading";
    pub const QTY_DIRECTION: &str = "data-cart-qty-change";
    pub const QTY_LINE_KEY: &str = "data-line-key";
    pub const QTY_CURRENT: &str = "data-current-qty";
    pub const ADD_BUSY: &str = "data-cart-add-busy";
    pub const ADD_SPINNER: &str = "data-cart-add-spinner";
}

pub mod classes {
    pub const HIDDEN: &str = "tw:hidden";
    pub const VISIBLE: &str = "tw:visible";
    pub const INVISIBLE: &str = "tw:invisible";
    pub const POINTER_NONE: &str = "tw:pointer-events-none";
    pub const POINTER_AUTO: &str = "tw:pointer-events-auto";
    pub const SLID_OUT: &str = "tw:translate-x-full";
    pub const SLID_IN: &str = "tw:translate-x-0";
    pub const SPINNER: &str = "tw:hidden tw:ml-2 tw:inline-flex tw:w-4 tw:h-4 tw:rounded-full tw:border-2 tw:border-current tw:border-t-transparent tw:animate-spin";
}

/// Add then remove utility classes
pub(crate) fn swap_classes(el: &Element, add: &[&str], remove: &[&str]) {
    let list = el.class_list();
    for class in remove {
        let _ = list.remove_1(class);
    }
    for class in add {
        let _ = list.add_1(class);
    }
}

/// First descendant matching `selector`
pub(crate) fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}
