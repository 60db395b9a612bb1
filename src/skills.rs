//! Click-to-reveal skill detail panel.
//!
//! Each `.skill-category` owns one `.skill-detail` panel. Clicking a
//! `.skill-item` highlights it exclusively and shows its `data-detail` text
//! in its category's panel. The reveal is staged: text and `display` are set
//! immediately, and the `active` transition class is added by a follow-up
//! [`PendingReveal`] that the host applies after the configured delay.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::consts::{
    SKILL_CATEGORY_SELECTOR, SKILL_DETAIL_ACTIVE_CLASS, SKILL_DETAIL_ATTR, SKILL_DETAIL_SELECTOR,
    SKILL_HIGHLIGHT_CLASS, SKILL_HIGHLIGHT_SELECTOR, SKILL_ITEM_SELECTOR,
};
use crate::dom::Dom;

/// Second step of a reveal, due after the reveal delay.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReveal<N> {
    pub panel: N,
}

impl<N> PendingReveal<N> {
    /// Add the transition class to the panel.
    pub fn apply<D: Dom<Node = N>>(&self, dom: &D) {
        dom.add_class(&self.panel, SKILL_DETAIL_ACTIVE_CLASS);
    }
}

pub struct SkillPanel<D: Dom> {
    items: Vec<D::Node>,
}

impl<D: Dom> SkillPanel<D> {
    #[must_use]
    pub fn mount(dom: &D) -> Self {
        Self { items: dom.query_all(SKILL_ITEM_SELECTOR) }
    }

    /// Every skill item, for event wiring.
    #[must_use]
    pub fn items(&self) -> &[D::Node] {
        &self.items
    }

    /// Handle a click on `item`. Returns the pending second reveal step when
    /// the item's category has a detail panel.
    pub fn on_click(&self, dom: &D, item: &D::Node) -> Option<PendingReveal<D::Node>> {
        for highlighted in dom.query_all(SKILL_HIGHLIGHT_SELECTOR) {
            dom.remove_class(&highlighted, SKILL_HIGHLIGHT_CLASS);
        }
        for detail in dom.query_all(SKILL_DETAIL_SELECTOR) {
            dom.remove_class(&detail, SKILL_DETAIL_ACTIVE_CLASS);
            dom.set_style(&detail, "display", "none");
        }

        dom.add_class(item, SKILL_HIGHLIGHT_CLASS);

        let category = dom.closest(item, SKILL_CATEGORY_SELECTOR)?;
        let panel = dom.query_in(&category, SKILL_DETAIL_SELECTOR)?;
        let text = dom.attr(item, SKILL_DETAIL_ATTR).unwrap_or_default();
        dom.set_text(&panel, &text);
        dom.set_style(&panel, "display", "block");
        Some(PendingReveal { panel })
    }
}
