//! Browser fixtures shared by the DOM layer tests

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use cart_drawer_core::{CurrencyCode, DrawerConfig, DrawerController, ItemsPlan, LineImage, LineView, RenderPlan, SharedDrawer};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{DomView, DrawerAnchors};
use crate::intl::IntlMoney;

const FIXTURE_ID: &str = "cart-drawer-fixture";

/// Close fallback used by fixtures, short enough to wait out in a test
pub const FALLBACK_MS: u32 = 50;

const LINE_TEMPLATE: &str = r#"<template data-cart-drawer-line-template><li data-cart-line-key=""><img data-cart-line-image class="tw:hidden" alt=""><span data-cart-line-title></span><span data-cart-line-variant hidden></span><button type="button" data-cart-qty-change="decrement">-</button><span data-cart-line-qty></span><button type="button" data-cart-qty-change="increment">+</button><span data-cart-line-price></span><s data-cart-line-original class="tw:hidden"></s></li></template>"#;

/// Drawer markup as a theme ships it, plus a trigger, a loose quantity
/// control and an add form outside the drawer
pub fn markup(with_template: bool) -> String {
    format!(
        r#"<div id="lw-cart-drawer" aria-hidden="true" class="tw:invisible tw:pointer-events-none">
  <div id="overlay" data-cart-drawer-overlay></div>
  <aside id="panel" data-cart-drawer-panel data-shop-currency="eur" class="tw:translate-x-full">
    <button id="close" type="button" data-cart-drawer-close><span id="close-icon">x</span></button>
    <p id="empty" data-cart-drawer-empty>Your cart is empty</p>
    <ul id="items" data-cart-drawer-items></ul>
    <span id="subtotal" data-cart-drawer-subtotal></span>
    {}
  </aside>
</div>
<a id="trigger" href="/cart" data-cart-drawer-trigger><span id="trigger-label">Cart</span></a>
<div data-cart-qty-change="increment" data-line-key="k1" data-current-qty="2"><span id="qty-label">+</span></div>
<form id="add-form" action="/cart/add" method="post">
  <input name="id" value="101">
  <button id="add-button" type="submit"><span id="add-label">Add</span></button>
</form>"#,
        if with_template { LINE_TEMPLATE } else { "" }
    )
}

/// Replace the previous fixture with `html`
pub fn mount(html: &str) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(previous) = document.get_element_by_id(FIXTURE_ID) {
        previous.remove();
    }
    let holder = document.create_element("div").unwrap();
    holder.set_id(FIXTURE_ID);
    holder.set_inner_html(html);
    document.body().unwrap().append_child(&holder).unwrap();
    document
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// A view with no controller behind it
pub fn view(document: &Document) -> DomView {
    let anchors = DrawerAnchors::find(document).expect("drawer markup");
    DomView::new(web_sys::window().unwrap(), document.clone(), anchors, FALLBACK_MS, Weak::new())
}

/// A controller wired to the fixture's markup
pub fn drawer(document: &Document) -> SharedDrawer<DomView> {
    let anchors = DrawerAnchors::find(document).expect("drawer markup");
    let window = web_sys::window().unwrap();
    let document = document.clone();
    Rc::new_cyclic(move |weak| {
        let view = DomView::new(window, document, anchors, FALLBACK_MS, weak.clone());
        let money = IntlMoney::new(&CurrencyCode::default());
        RefCell::new(DrawerController::new(view, Box::new(money), DrawerConfig::default()))
    })
}

pub fn line(key: &str, quantity: u32) -> LineView {
    LineView {
        key: key.to_string(),
        image: None,
        title: format!("Product {}", key),
        variant: None,
        quantity,
        price: "$10.00".to_string(),
        original_price: None,
    }
}

/// A line with every optional part present
pub fn full_line(key: &str, quantity: u32) -> LineView {
    LineView {
        image: Some(LineImage { src: "https://cdn.example/tee.jpg".to_string(), alt: "Tee".to_string() }),
        variant: Some("Blue / M".to_string()),
        original_price: Some("$25.00".to_string()),
        ..line(key, quantity)
    }
}

pub fn lines_plan(lines: Vec<LineView>) -> RenderPlan {
    RenderPlan { items: ItemsPlan::Lines(lines), subtotal: "$30.00".to_string() }
}

pub fn stale_items(document: &Document) -> HtmlElement {
    let items: HtmlElement = by_id(document, "items");
    items.set_inner_html("<li>stale</li>");
    items
}
