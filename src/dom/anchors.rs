//! Drawer Anchors
//!
//! Elements looked up once at startup. Only the root is mandatory; rendering
//! checks the rest each time and skips when they are missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlTemplateElement};

use super::{attrs, find, selectors, DRAWER_ID};

pub struct DrawerAnchors {
    pub root: Element,
    pub overlay: Option<Element>,
    pub panel: Option<Element>,
    pub items: Option<HtmlElement>,
    pub empty: Option<HtmlElement>,
    pub subtotal: Option<Element>,
    /// Only a real `<template>` counts
    pub line_template: Option<HtmlTemplateElement>,
}

impl DrawerAnchors {
    pub fn find(document: &Document) -> Option<Self> {
        let root = document.get_element_by_id(DRAWER_ID)?;
        let html = |selector| find(&root, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Some(Self {
            overlay: find(&root, selectors::OVERLAY),
            panel: find(&root, selectors::PANEL),
            items: html(selectors::ITEMS),
            empty: html(selectors::EMPTY),
            subtotal: find(&root, selectors::SUBTOTAL),
            line_template: find(&root, selectors::LINE_TEMPLATE)
                .and_then(|el| el.dyn_into::<HtmlTemplateElement>().ok()),
            root,
        })
    }

    /// Currency code attribute on the panel, if any
    pub fn currency(&self) -> Option<String> {
        self.panel.as_ref().and_then(|panel| panel.get_attribute(attrs::CURRENCY))
    }
}
