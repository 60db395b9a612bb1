//! Host capability set over the page's element tree.
//!
//! DESIGN
//! ======
//! Controllers never touch `web_sys` directly. They look elements up and
//! mutate them through [`Dom`], which the browser binding implements over
//! `web_sys::Document` and the tests implement over an in-memory tree.
//!
//! Selectors passed to the query methods are simple compound selectors
//! (`.class`, `#id`, `tag`, `tag[attr]`) or comma-separated lists of them.
//! Descendant scoping goes through [`Dom::query_in`] / [`Dom::query_all_in`]
//! instead of descendant combinators. A comma list resolves to the first
//! match in document order.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Element lookup and mutation operations supplied by the host.
///
/// All mutations take `&self`: like the browser DOM, the tree is shared and
/// mutated in place. Lookups of optional elements return `Option` and
/// mutations on a live node are infallible from the caller's point of view.
pub trait Dom {
    /// Handle to one element. Equality is element identity.
    type Node: Clone + PartialEq;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;

    /// The element with the given `id` attribute.
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element in the document matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// Every element in the document matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`.
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Every descendant of `scope` matching `selector`, in document order.
    fn query_all_in(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// `node` itself or its nearest ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Add `class` when `on`, remove it otherwise.
    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Text content of `node` and its descendants.
    fn text(&self, node: &Self::Node) -> String;

    /// Replace the children of `node` with a single text node.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Replace the children of `node` with parsed markup.
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    /// Set one inline style property (`opacity`, `pointer-events`, `display`).
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Current value of a form input. Empty for non-input elements.
    fn value(&self, node: &Self::Node) -> String;

    fn set_value(&self, node: &Self::Node, value: &str);

    /// Vertical scroll offset of the window, in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Distance from the top of the document to the top of `node`.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Inner height of `node`, in CSS pixels.
    fn client_height(&self, node: &Self::Node) -> f64;
}

/// Whether a `document.readyState` value means the document is still
/// parsing, so mounting has to wait for `DOMContentLoaded`.
#[must_use]
pub fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}
