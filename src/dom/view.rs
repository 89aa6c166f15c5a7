//! DOM Drawer View
//!
//! Applies controller decisions to the page: visibility classes, focus,
//! Escape listener, close completion timer, and line rows cloned from the
//! `<template>`.

use std::cell::RefCell;
use std::rc::Weak;

use cart_drawer_core::{
    CloseTicket, CollapseSignal, DrawerController, DrawerError, DrawerResult, DrawerView, ItemsPlan, LineView,
    RenderPlan,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentFragment, Element, HtmlButtonElement, HtmlElement, HtmlTemplateElement, KeyboardEvent, Window};

use super::{attrs, classes, find, selectors, swap_classes, DrawerAnchors};

type WeakDrawer = Weak<RefCell<DrawerController<DomView>>>;

pub struct DomView {
    window: Window,
    document: Document,
    anchors: DrawerAnchors,
    drawer: WeakDrawer,
    close_fallback_ms: u32,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
    escape_bound: bool,
    collapse_timer: Option<Timeout>,
}

impl DomView {
    pub fn new(
        window: Window,
        document: Document,
        anchors: DrawerAnchors,
        close_fallback_ms: u32,
        drawer: WeakDrawer,
    ) -> Self {
        let keyed = drawer.clone();
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            let Some(drawer) = keyed.upgrade() else { return };
            if drawer.borrow_mut().handle_key(&ev.key()) {
                ev.prevent_default();
            }
        });

        Self {
            window,
            document,
            anchors,
            drawer,
            close_fallback_ms,
            on_keydown,
            escape_bound: false,
            collapse_timer: None,
        }
    }

    pub fn overlay(&self) -> Option<Element> {
        self.anchors.overlay.clone()
    }

    pub fn panel(&self) -> Option<Element> {
        self.anchors.panel.clone()
    }

    fn build_row(&self, template: &HtmlTemplateElement, line: &LineView) -> Option<Element> {
        let fragment: DocumentFragment = template.content().clone_node_with_deep(true).ok()?.dyn_into().ok()?;
        let row = fragment.first_element_child()?;
        let _ = row.set_attribute(attrs::LINE_KEY, &line.key);

        if let Some(img) = find(&row, selectors::LINE_IMAGE) {
            match &line.image {
                Some(image) => {
                    let _ = img.set_attribute("src", &image.src);
                    let _ = img.set_attribute("alt", &image.alt);
                    swap_classes(&img, &[], &[classes::HIDDEN]);
                }
                None => swap_classes(&img, &[classes::HIDDEN], &[]),
            }
        }

        if let Some(title) = find(&row, selectors::LINE_TITLE) {
            title.set_text_content(Some(&line.title));
        }

        if let Some(variant) = find(&row, selectors::LINE_VARIANT) {
            match &line.variant {
                Some(label) => {
                    variant.set_text_content(Some(label));
                    let _ = variant.remove_attribute("hidden");
                }
                None => {
                    let _ = variant.set_attribute("hidden", "");
                }
            }
        }

        let quantity = line.quantity.to_string();
        if let Some(qty) = find(&row, selectors::LINE_QTY) {
            qty.set_text_content(Some(&quantity));
        }
        for selector in [selectors::QTY_DECREMENT, selectors::QTY_INCREMENT] {
            if let Some(button) = find(&row, selector) {
                let _ = button.set_attribute(attrs::QTY_LINE_KEY, &line.key);
                let _ = button.set_attribute(attrs::QTY_CURRENT, &quantity);
            }
        }

        if let Some(price) = find(&row, selectors::LINE_PRICE) {
            price.set_text_content(Some(&line.price));
        }

        if let Some(original) = find(&row, selectors::LINE_ORIGINAL) {
            match &line.original_price {
                Some(text) => {
                    original.set_text_content(Some(text));
                    swap_classes(&original, &[], &[classes::HIDDEN]);
                }
                None => swap_classes(&original, &[classes::HIDDEN], &[]),
            }
        }

        Some(row)
    }

    fn line_row(&self, key: &str) -> Option<Element> {
        let items = self.anchors.items.as_ref()?;
        let rows = items.query_selector_all(selectors::LINE).ok()?;
        (0..rows.length())
            .filter_map(|i| rows.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .find(|row| row.get_attribute(attrs::LINE_KEY).as_deref() == Some(key))
    }
}

fn set_shown(el: &HtmlElement, shown: bool) {
    if shown {
        swap_classes(el, &[], &[classes::HIDDEN]);
    } else {
        swap_classes(el, &[classes::HIDDEN], &[]);
    }
    el.set_hidden(!shown);
}

impl DrawerView for DomView {
    type Focus = HtmlElement;
    type Submitter = HtmlButtonElement;

    fn active_element(&self) -> Option<HtmlElement> {
        self.document.active_element()?.dyn_into().ok()
    }

    fn focus(&mut self, target: &HtmlElement) {
        let _ = target.focus();
    }

    fn focus_close_control(&mut self) {
        if let Some(close) = find(&self.anchors.root, selectors::CLOSE).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
            let _ = close.focus();
        }
    }

    fn show(&mut self) {
        // a pending fallback belongs to a close that this open supersedes
        self.collapse_timer = None;
        let Some(panel) = &self.anchors.panel else { return };
        let root = &self.anchors.root;
        let _ = root.set_attribute("aria-hidden", "false");
        swap_classes(root, &[classes::POINTER_AUTO, classes::VISIBLE], &[classes::POINTER_NONE, classes::INVISIBLE]);
        swap_classes(panel, &[classes::SLID_IN], &[classes::SLID_OUT]);
    }

    fn collapse(&mut self) {
        let Some(panel) = &self.anchors.panel else { return };
        swap_classes(&self.anchors.root, &[classes::POINTER_NONE], &[classes::POINTER_AUTO]);
        swap_classes(panel, &[classes::SLID_OUT], &[classes::SLID_IN]);
    }

    fn hide(&mut self) {
        let root = &self.anchors.root;
        let _ = root.set_attribute("aria-hidden", "true");
        swap_classes(root, &[classes::INVISIBLE], &[classes::VISIBLE]);
    }

    fn listen_for_escape(&mut self, listen: bool) {
        if listen == self.escape_bound {
            return;
        }
        let callback = self.on_keydown.as_ref().unchecked_ref();
        let result = if listen {
            self.document.add_event_listener_with_callback("keydown", callback)
        } else {
            self.document.remove_event_listener_with_callback("keydown", callback)
        };
        if result.is_ok() {
            self.escape_bound = listen;
        }
    }

    fn await_collapse(&mut self, ticket: CloseTicket) {
        let drawer = self.drawer.clone();
        self.collapse_timer = Some(Timeout::new(self.close_fallback_ms, move || {
            if let Some(drawer) = drawer.upgrade() {
                drawer.borrow_mut().complete_close(ticket, CollapseSignal::FallbackTimer);
            }
        }));
    }

    fn collapse_settled(&mut self, via: CollapseSignal) {
        // Dropping clears a pending timeout. When the timer itself fired, this
        // runs inside its callback and wasm-bindgen frees the closure once the
        // call returns.
        if self.collapse_timer.take().is_some() {
            log::trace!("close fallback released after {:?}", via);
        }
    }

    fn paint(&mut self, plan: &RenderPlan) -> DrawerResult<()> {
        let anchors = &self.anchors;
        let items = anchors.items.as_ref().ok_or(DrawerError::MissingDomAnchor("items container"))?;
        let empty = anchors.empty.as_ref().ok_or(DrawerError::MissingDomAnchor("empty state"))?;
        let subtotal = anchors.subtotal.as_ref().ok_or(DrawerError::MissingDomAnchor("subtotal"))?;

        match &plan.items {
            ItemsPlan::Empty => {
                set_shown(empty, true);
                items.set_inner_html("");
                set_shown(items, false);
            }
            ItemsPlan::Lines(lines) => {
                set_shown(empty, false);
                set_shown(items, true);
                let fragment = self.document.create_document_fragment();
                if let Some(template) = &anchors.line_template {
                    for line in lines {
                        if let Some(row) = self.build_row(template, line) {
                            let _ = fragment.append_child(&row);
                        }
                    }
                }
                items.set_inner_html("");
                let _ = items.append_child(&fragment);
            }
        }

        subtotal.set_text_content(Some(&plan.subtotal));
        Ok(())
    }

    fn set_line_loading(&mut self, key: &str, loading: bool) {
        let Some(row) = self.line_row(key) else { return };
        if loading {
            let _ = row.set_attribute(attrs::LOADING, "true");
        } else {
            let _ = row.remove_attribute(attrs::LOADING);
        }
    }

    fn set_submitter_busy(&mut self, button: &HtmlButtonElement, busy: bool) {
        if busy {
            let _ = button.set_attribute(attrs::ADD_BUSY, "true");
            button.set_disabled(true);
            if let Ok(spinner) = self.document.create_element("span") {
                let _ = spinner.set_attribute(attrs::ADD_SPINNER, "");
                let _ = spinner.set_attribute("aria-hidden", "true");
                spinner.set_class_name(classes::SPINNER);
                let _ = button.append_child(&spinner);
            }
        } else {
            let _ = button.remove_attribute(attrs::ADD_BUSY);
            button.set_disabled(false);
            if let Ok(Some(spinner)) = button.query_selector(selectors::ADD_SPINNER) {
                spinner.remove();
            }
        }
    }

    fn navigate(&mut self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            log::error!("navigation to {} failed: {:?}", url, err);
        }
    }
}
