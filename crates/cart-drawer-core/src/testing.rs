//! In-memory fakes shared by the unit tests

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::{CartApi, ChangeLine};
use crate::config::DrawerConfig;
use crate::controller::DrawerController;
use crate::domain::{Cart, CartPayload, DrawerError, DrawerResult, LineItem};
use crate::money::MoneyFormat;
use crate::pipeline::SharedDrawer;
use crate::render::RenderPlan;
use crate::view::DrawerView;
use crate::visibility::{CloseTicket, CollapseSignal};

/// `$` plus two decimals, no grouping
pub struct TestMoney;

impl MoneyFormat for TestMoney {
    fn format_major(&self, major: f64) -> String {
        format!("${:.2}", major)
    }
}

pub fn line(key: &str, quantity: u32) -> LineItem {
    LineItem {
        key: key.to_string(),
        quantity,
        title: Some(format!("Product {}", key)),
        line_price: 1000,
        ..Default::default()
    }
}

pub fn cart_with_lines(count: usize) -> Cart {
    Cart {
        items: (0..count).map(|i| line(&format!("line-{}", i), 1)).collect(),
        total_price: 1000 * count as i64,
    }
}

pub fn cart_json(count: usize, total_price: i64) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| json!({ "key": format!("line-{}", i), "quantity": 1, "title": "Thing", "line_price": 1000 }))
        .collect();
    json!({ "items": items, "total_price": total_price })
}

pub fn controller(view: FakeView) -> DrawerController<FakeView> {
    DrawerController::new(view, Box::new(TestMoney), DrawerConfig::default())
}

pub fn shared(view: FakeView) -> SharedDrawer<FakeView> {
    Rc::new(RefCell::new(controller(view)))
}

/// Records what the controller asked of the page
#[derive(Debug)]
pub struct FakeView {
    pub active: Option<&'static str>,
    pub focused: Option<&'static str>,
    pub visible: bool,
    pub interactive: bool,
    pub hidden: bool,
    pub hide_count: usize,
    pub escape_listening: bool,
    pub awaiting: Option<CloseTicket>,
    pub settled_via: Vec<CollapseSignal>,
    pub anchors_present: bool,
    pub painted: Option<RenderPlan>,
    pub paint_count: usize,
    pub loading: BTreeSet<String>,
    pub busy: BTreeSet<&'static str>,
    pub busy_history: Vec<(&'static str, bool)>,
    pub navigations: Vec<String>,
}

impl Default for FakeView {
    fn default() -> Self {
        Self {
            active: None,
            focused: None,
            visible: false,
            interactive: false,
            hidden: true,
            hide_count: 0,
            escape_listening: false,
            awaiting: None,
            settled_via: Vec::new(),
            anchors_present: true,
            painted: None,
            paint_count: 0,
            loading: BTreeSet::new(),
            busy: BTreeSet::new(),
            busy_history: Vec::new(),
            navigations: Vec::new(),
        }
    }
}

impl FakeView {
    pub fn focused_on(element: &'static str) -> Self {
        Self { active: Some(element), focused: Some(element), ..Self::default() }
    }
}

impl DrawerView for FakeView {
    type Focus = &'static str;
    type Submitter = &'static str;

    fn active_element(&self) -> Option<Self::Focus> {
        self.active
    }

    fn focus(&mut self, target: &Self::Focus) {
        self.focused = Some(*target);
        self.active = Some(*target);
    }

    fn focus_close_control(&mut self) {
        self.focus(&"close-control");
    }

    fn show(&mut self) {
        self.visible = true;
        self.interactive = true;
        self.hidden = false;
    }

    fn collapse(&mut self) {
        self.interactive = false;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hidden = true;
        self.hide_count += 1;
    }

    fn listen_for_escape(&mut self, listen: bool) {
        self.escape_listening = listen;
    }

    fn await_collapse(&mut self, ticket: CloseTicket) {
        self.awaiting = Some(ticket);
    }

    fn collapse_settled(&mut self, via: CollapseSignal) {
        self.awaiting = None;
        self.settled_via.push(via);
    }

    fn paint(&mut self, plan: &RenderPlan) -> DrawerResult<()> {
        if !self.anchors_present {
            return Err(DrawerError::MissingDomAnchor("items container"));
        }
        self.painted = Some(plan.clone());
        self.paint_count += 1;
        Ok(())
    }

    fn set_line_loading(&mut self, key: &str, loading: bool) {
        if loading {
            self.loading.insert(key.to_string());
        } else {
            self.loading.remove(key);
        }
    }

    fn set_submitter_busy(&mut self, submitter: &Self::Submitter, busy: bool) {
        if busy {
            self.busy.insert(*submitter);
        } else {
            self.busy.remove(submitter);
        }
        self.busy_history.push((*submitter, busy));
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}

/// Scripted responses, consumed front to back
#[derive(Default)]
pub struct FakeApi {
    pub reads: RefCell<VecDeque<DrawerResult<CartPayload>>>,
    pub adds: RefCell<VecDeque<DrawerResult<()>>>,
    pub changes: RefCell<VecDeque<DrawerResult<CartPayload>>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub sent_changes: RefCell<Vec<(String, u32)>>,
}

#[async_trait(?Send)]
impl CartApi for FakeApi {
    type Form = Vec<(String, String)>;

    async fn read_cart(&self) -> DrawerResult<CartPayload> {
        self.calls.borrow_mut().push("read");
        self.reads.borrow_mut().pop_front().expect("unexpected read")
    }

    async fn add_items(&self, _form: &Self::Form) -> DrawerResult<()> {
        self.calls.borrow_mut().push("add");
        self.adds.borrow_mut().pop_front().expect("unexpected add")
    }

    async fn change_line(&self, change: &ChangeLine<'_>) -> DrawerResult<CartPayload> {
        self.calls.borrow_mut().push("change");
        self.sent_changes.borrow_mut().push((change.id.to_string(), change.quantity));
        self.changes.borrow_mut().pop_front().expect("unexpected change")
    }
}
