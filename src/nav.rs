//! Mobile menu toggle and scroll-position link highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::PageConfig;
use crate::consts::{
    MENU_OPEN_CLASS, MENU_TOGGLE_CLASS, MENU_TOGGLE_SELECTOR, NAV_ACTIVE_CLASS, NAV_LINK_SELECTOR, NAV_LIST_SELECTOR,
    SCROLL_LOCK_CLASS, SECTION_SELECTOR,
};
use crate::dom::Dom;

/// Vertical extent of one page section, before the header offset is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section whose span contains `scroll_y`.
///
/// Each span starts `header_offset` above the section's top. When spans
/// overlap the later section wins; when none contains the offset there is
/// no current section.
#[must_use]
pub fn section_at(scroll_y: f64, sections: &[SectionSpan], header_offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - header_offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Whether a nav link's `href` points at the section `id`.
#[must_use]
pub fn link_targets(href: &str, id: &str) -> bool {
    match href.rsplit_once('#') {
        Some((_, fragment)) => fragment == id,
        None => href == id,
    }
}

pub struct NavController<D: Dom> {
    toggle: Option<D::Node>,
    menu: Option<D::Node>,
    body: Option<D::Node>,
    links: Vec<D::Node>,
    sections: Vec<D::Node>,
    header_offset: f64,
}

impl<D: Dom> NavController<D> {
    #[must_use]
    pub fn mount(dom: &D, config: &PageConfig) -> Self {
        let menu = dom.query(NAV_LIST_SELECTOR);
        let links = menu.as_ref().map(|m| dom.query_all_in(m, NAV_LINK_SELECTOR)).unwrap_or_default();
        Self {
            toggle: dom.query(MENU_TOGGLE_SELECTOR),
            menu,
            body: dom.body(),
            links,
            sections: dom.query_all(SECTION_SELECTOR),
            header_offset: config.header_offset_px,
        }
    }

    /// The menu toggle control, for event wiring.
    #[must_use]
    pub fn toggle_node(&self) -> Option<&D::Node> {
        self.toggle.as_ref()
    }

    /// Every link in the nav list, for event wiring.
    #[must_use]
    pub fn links(&self) -> &[D::Node] {
        &self.links
    }

    /// Whether the mobile menu is currently open.
    #[must_use]
    pub fn is_open(&self, dom: &D) -> bool {
        self.menu.as_ref().is_some_and(|m| dom.has_class(m, MENU_OPEN_CLASS))
    }

    /// Flip the menu between open and closed.
    pub fn toggle_menu(&self, dom: &D) {
        let open = !self.is_open(dom);
        self.set_open(dom, open);
        log::debug!("nav: menu {}", if open { "opened" } else { "closed" });
    }

    /// A nav link was clicked. Closes the mobile menu if it is open; the
    /// link's own navigation is left to the browser.
    pub fn on_link_click(&self, dom: &D) {
        if self.is_open(dom) {
            self.set_open(dom, false);
        }
    }

    /// Mark the link of the section under the current scroll offset active
    /// and every other link inactive. Returns the active section id.
    #[must_use]
    pub fn highlight(&self, dom: &D) -> Option<String> {
        let spans = self.spans(dom);
        let current = section_at(dom.scroll_y(), &spans, self.header_offset).map(str::to_owned);
        for link in &self.links {
            let active = match (&current, dom.attr(link, "href")) {
                (Some(id), Some(href)) => link_targets(&href, id),
                _ => false,
            };
            dom.set_class(link, NAV_ACTIVE_CLASS, active);
        }
        current
    }

    fn spans(&self, dom: &D) -> Vec<SectionSpan> {
        self.sections
            .iter()
            .filter_map(|s| {
                let id = dom.attr(s, "id")?;
                Some(SectionSpan { id, top: dom.offset_top(s), height: dom.client_height(s) })
            })
            .collect()
    }

    /// The menu class, the toggle animation, and the body scroll lock are
    /// always written together.
    fn set_open(&self, dom: &D, open: bool) {
        if let Some(menu) = &self.menu {
            dom.set_class(menu, MENU_OPEN_CLASS, open);
        }
        if let Some(toggle) = &self.toggle {
            dom.set_class(toggle, MENU_TOGGLE_CLASS, open);
        }
        if let Some(body) = &self.body {
            dom.set_class(body, SCROLL_LOCK_CLASS, open);
        }
    }
}
