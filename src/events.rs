//! Delegated Listeners
//!
//! One click and one capturing submit listener on the document, so controls
//! injected after load work without registration. The panel's transition-end
//! listener completes closes. All closures live for the page lifetime.

use std::rc::Rc;

use cart_drawer_core::{
    classify_click, is_cart_add_form, Action, CartPipeline, ClickTarget, CollapseSignal, QuantityControl, SharedDrawer,
};
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, FormData, HtmlButtonElement, HtmlFormElement, SubmitEvent};

use crate::commands::FetchCartApi;
use crate::dom::{attrs, selectors, DomView};

pub type Pipeline = Rc<CartPipeline<FetchCartApi, DomView>>;

pub fn bind(document: &Document, pipeline: Pipeline) -> Result<(), JsValue> {
    bind_click(document, pipeline.clone())?;
    bind_submit(document, pipeline.clone())?;
    bind_transition_end(pipeline.drawer())?;
    Ok(())
}

/// Describe what the clicked element sits inside of
fn click_target(target: &Element, overlay: Option<&Element>) -> ClickTarget {
    let within = |selector: &str| target.closest(selector).ok().flatten();
    ClickTarget {
        within_trigger: within(selectors::TRIGGER).is_some(),
        within_close: within(selectors::CLOSE).is_some(),
        is_overlay: overlay.is_some_and(|overlay| overlay == target),
        quantity: within(selectors::QTY_CHANGE).map(|control| QuantityControl {
            line_key: control.get_attribute(attrs::QTY_LINE_KEY),
            direction: control.get_attribute(attrs::QTY_DIRECTION),
            current_qty: control.get_attribute(attrs::QTY_CURRENT),
        }),
    }
}

fn bind_click(document: &Document, pipeline: Pipeline) -> Result<(), JsValue> {
    let overlay = pipeline.drawer().borrow().view().overlay();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else { return };
        let click = click_target(&target, overlay.as_ref());
        if click.claims_default() {
            ev.prevent_default();
        }

        match classify_click(&click) {
            Action::Open => {
                let pipeline = pipeline.clone();
                spawn_local(async move {
                    if let Err(err) = pipeline.open_fresh().await {
                        warn!("drawer opened with stale contents: {}", err);
                    }
                });
            }
            Action::Close => {
                pipeline.drawer().borrow_mut().close();
            }
            Action::QuantityChange(change) => {
                let pipeline = pipeline.clone();
                spawn_local(async move {
                    pipeline.change_quantity(&change).await;
                });
            }
            Action::None => {}
        }
    });

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// The form being submitted, whether the event targets it or a descendant
fn submitted_form(ev: &SubmitEvent) -> Option<HtmlFormElement> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    match target.dyn_into::<HtmlFormElement>() {
        Ok(form) => Some(form),
        Err(other) => other.closest("form").ok().flatten()?.dyn_into().ok(),
    }
}

fn bind_submit(document: &Document, pipeline: Pipeline) -> Result<(), JsValue> {
    let on_submit = Closure::<dyn FnMut(SubmitEvent)>::new(move |ev: SubmitEvent| {
        let Some(form) = submitted_form(&ev) else { return };
        if !is_cart_add_form(form.get_attribute("action").as_deref()) {
            return;
        }
        let Ok(fields) = FormData::new_with_form(&form) else { return };
        ev.prevent_default();

        let submitter = ev.submitter().and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let pipeline = pipeline.clone();
        spawn_local(async move {
            pipeline.add_to_cart(&fields, submitter).await;
        });
    });

    document.add_event_listener_with_callback_and_bool("submit", on_submit.as_ref().unchecked_ref(), true)?;
    on_submit.forget();
    Ok(())
}

fn bind_transition_end(drawer: &SharedDrawer<DomView>) -> Result<(), JsValue> {
    let Some(panel) = drawer.borrow().view().panel() else { return Ok(()) };
    let drawer = drawer.clone();
    let on_transition_end = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        drawer.borrow_mut().complete_pending_close(CollapseSignal::TransitionEnd);
    });

    panel.add_event_listener_with_callback("transitionend", on_transition_end.as_ref().unchecked_ref())?;
    on_transition_end.forget();
    Ok(())
}
