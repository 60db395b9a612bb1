//! Browser binding: `web-sys` implementations of [`Dom`] and
//! [`KeyValueStore`], and the `wasm-bindgen` start hook.
//!
//! The start hook waits for `DOMContentLoaded` if the document is still
//! parsing, mounts a [`Portfolio`], and wires every DOM listener to
//! [`Portfolio::handle`]. Listeners and the hero interval live for the whole
//! page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, NodeList, Storage, StorageEvent, Window,
};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::dom::{Dom, still_parsing};
use crate::error::StoreError;
use crate::page::{Action, PageEvent, Portfolio};
use crate::store::{KeyValueStore, MemoryStore};

// =============================================================================
// Dom
// =============================================================================

/// [`Dom`] over the live document.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// `None` outside a browser window (e.g. in a worker).
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }
}

fn warn_on_err(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{op} failed: {e:?}");
    }
}

fn first_or_warn(selector: &str, result: Result<Option<Element>, JsValue>) -> Option<Element> {
    match result {
        Ok(found) => found,
        Err(e) => {
            log::warn!("invalid selector {selector:?}: {e:?}");
            None
        }
    }
}

fn all_or_warn(selector: &str, result: Result<NodeList, JsValue>) -> Vec<Element> {
    match result {
        Ok(list) => (0..list.length()).filter_map(|i| list.item(i)?.dyn_ref::<Element>().cloned()).collect(),
        Err(e) => {
            log::warn!("invalid selector {selector:?}: {e:?}");
            Vec::new()
        }
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        first_or_warn(selector, self.document.query_selector(selector))
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        all_or_warn(selector, self.document.query_selector_all(selector))
    }

    fn query_in(&self, scope: &Element, selector: &str) -> Option<Element> {
        first_or_warn(selector, scope.query_selector(selector))
    }

    fn query_all_in(&self, scope: &Element, selector: &str) -> Vec<Element> {
        all_or_warn(selector, scope.query_selector_all(selector))
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        first_or_warn(selector, node.closest(selector))
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        warn_on_err("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&self, node: &Element, class: &str) {
        warn_on_err("classList.remove", node.class_list().remove_1(class));
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        match node.dyn_ref::<HtmlElement>() {
            Some(el) => warn_on_err("style.setProperty", el.style().set_property(property, value)),
            None => log::debug!("set_style({property}) on non-HTML element ignored"),
        }
    }

    fn value(&self, node: &Element) -> String {
        node.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value).unwrap_or_default()
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_else(|e| {
            log::warn!("scrollY unavailable: {e:?}");
            0.0
        })
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn client_height(&self, node: &Element) -> f64 {
        f64::from(node.client_height())
    }
}

// =============================================================================
// Store
// =============================================================================

/// `localStorage`, or an in-memory stand-in when the browser withholds it.
pub enum WebStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl WebStore {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        match local_storage(window) {
            Ok(storage) => Self::Local(storage),
            Err(e) => {
                log::warn!("{e}; theme and stats will not persist across reloads");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

fn local_storage(window: &Window) -> Result<Storage, StoreError> {
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(e) => Err(StoreError::Read { key: "localStorage".into(), reason: format!("{e:?}") }),
    }
}

impl KeyValueStore for WebStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Local(storage) => {
                storage.get_item(key).map_err(|e| StoreError::Read { key: key.into(), reason: format!("{e:?}") })
            }
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Local(storage) => {
                storage.set_item(key, value).map_err(|e| StoreError::Write { key: key.into(), reason: format!("{e:?}") })
            }
            Self::Memory(memory) => memory.set(key, value),
        }
    }
}

// =============================================================================
// Runtime
// =============================================================================

struct Runtime {
    dom: WebDom,
    store: WebStore,
    page: Portfolio<WebDom>,
}

type Shared = Rc<RefCell<Runtime>>;

/// Run one event through the page and carry out the returned action.
fn dispatch(runtime: &Shared, event: PageEvent<Element>) {
    let action = match runtime.try_borrow_mut() {
        Ok(mut guard) => {
            let rt = &mut *guard;
            rt.page.handle(&rt.dom, &rt.store, event)
        }
        Err(e) => {
            log::warn!("dropping re-entrant {event:?}: {e}");
            return;
        }
    };
    if let Action::ScheduleReveal { panel, delay_ms } = action {
        let runtime = Rc::clone(runtime);
        Timeout::new(delay_ms, move || dispatch(&runtime, PageEvent::RevealDue(panel))).forget();
    }
}

/// Attach a listener for the page's lifetime. `to_event` maps the DOM event
/// to a page event, or `None` to ignore it.
fn listen<F>(runtime: &Shared, target: &EventTarget, kind: &str, to_event: F)
where
    F: Fn(&Event) -> Option<PageEvent<Element>> + 'static,
{
    let runtime = Rc::clone(runtime);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(page_event) = to_event(&event) {
            dispatch(&runtime, page_event);
        }
    });
    warn_on_err(
        &format!("addEventListener({kind})"),
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()),
    );
    closure.forget();
}

fn inline_config(dom: &WebDom) -> Option<String> {
    dom.by_id(CONFIG_ELEMENT_ID)?.text_content()
}

/// Mount the page and wire every listener.
fn mount(dom: WebDom) {
    let store = WebStore::open(&dom.window);
    let config = PageConfig::from_json_or_default(inline_config(&dom).as_deref());
    let page = Portfolio::mount(&dom, &store, config);

    let window = dom.window.clone();
    let menu_toggle = page.nav().toggle_node().cloned();
    let nav_links = page.nav().links().to_vec();
    let switcher = page.theme().switcher().cloned();
    let (prev, next) = page
        .certificates()
        .map_or((None, None), |c| (c.prev_control().cloned(), c.next_control().cloned()));
    let skill_items = page.skills().items().to_vec();
    let edit_buttons = page.stats().edit_buttons().to_vec();
    let close = page.stats().close_control().cloned();
    let form = page.stats().form().cloned();
    let hero_interval = page.hero_interval();

    let runtime: Shared = Rc::new(RefCell::new(Runtime { dom, store, page }));

    if let Some(toggle) = &menu_toggle {
        listen(&runtime, toggle, "click", |_| Some(PageEvent::MenuToggle));
    }
    for link in &nav_links {
        listen(&runtime, link, "click", |_| Some(PageEvent::NavLinkClick));
    }
    listen(&runtime, &window, "scroll", |_| Some(PageEvent::Scroll));

    if let Some(switcher) = &switcher {
        listen(&runtime, switcher, "click", |_| Some(PageEvent::ThemeToggle));
    }

    if let Some(prev) = &prev {
        listen(&runtime, prev, "click", |_| Some(PageEvent::CertificatePrev));
    }
    if let Some(next) = &next {
        listen(&runtime, next, "click", |_| Some(PageEvent::CertificateNext));
    }
    if let Some(ms) = hero_interval {
        let runtime = Rc::clone(&runtime);
        Interval::new(ms, move || dispatch(&runtime, PageEvent::HeroTick)).forget();
    }

    for item in skill_items {
        let target = item.clone();
        listen(&runtime, &target, "click", move |_| Some(PageEvent::SkillClick(item.clone())));
    }

    for button in edit_buttons {
        let target = button.clone();
        listen(&runtime, &target, "click", move |_| Some(PageEvent::EditClick(button.clone())));
    }
    if let Some(close) = &close {
        listen(&runtime, close, "click", |_| Some(PageEvent::ModalClose));
    }
    listen(&runtime, &window, "click", |event| {
        let target = event.target()?.dyn_ref::<Element>()?.clone();
        Some(PageEvent::WindowClick(target))
    });
    if let Some(form) = &form {
        listen(&runtime, form, "submit", |event| {
            event.prevent_default();
            Some(PageEvent::Submit)
        });
    }

    listen(&runtime, &window, "storage", |event| {
        let change = event.dyn_ref::<StorageEvent>()?;
        Some(PageEvent::StorageChanged(change.key()))
    });
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }

    let Some(dom) = WebDom::new() else {
        log::error!("portfolio: no window or document; nothing to mount");
        return;
    };

    if !still_parsing(&dom.document.ready_state()) {
        mount(dom);
        return;
    }

    let document = dom.document.clone();
    let mut pending = Some(dom);
    let on_ready = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        if let Some(dom) = pending.take() {
            mount(dom);
        }
    });
    warn_on_err(
        "addEventListener(DOMContentLoaded)",
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()),
    );
    on_ready.forget();
}
