//! In-memory [`Dom`] for unit tests.
//!
//! Elements are created with a compact `tag#id.class.class` descriptor and
//! queried with the same compound-selector grammar the controllers use.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::dom::Dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
    text: String,
    html: String,
    value: String,
    style: BTreeMap<String, String>,
    offset_top: f64,
    client_height: f64,
}

/// One `tag#id.class[attr]` compound selector.
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<String>,
}

impl Compound {
    fn parse(raw: &str) -> Self {
        let mut out = Self::default();
        let mut rest = raw.trim();
        let tag_end = rest.find(['#', '.', '[']).unwrap_or(rest.len());
        if tag_end > 0 {
            out.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];
        while let Some(sigil) = rest.chars().next() {
            let body = &rest[1..];
            if sigil == '[' {
                let end = body.find(']').unwrap_or(body.len());
                out.attrs.push(body[..end].to_owned());
                rest = body.get(end + 1..).unwrap_or("");
                continue;
            }
            let end = body.find(['#', '.', '[']).unwrap_or(body.len());
            let name = body[..end].to_owned();
            if sigil == '#' {
                out.id = Some(name);
            } else {
                out.classes.push(name);
            }
            rest = &body[end..];
        }
        out
    }

    fn matches(&self, node: &FakeNode) -> bool {
        if self.tag.as_ref().is_some_and(|t| *t != node.tag) {
            return false;
        }
        if self.id.is_some() && self.id != node.id {
            return false;
        }
        if !self.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|a| if a == "id" { node.id.is_some() } else { node.attrs.contains_key(a) })
    }
}

fn parse_list(selector: &str) -> Vec<Compound> {
    selector.split(',').map(Compound::parse).collect()
}

pub struct FakeDom {
    nodes: RefCell<Vec<FakeNode>>,
    scroll_y: Cell<f64>,
}

const ROOT: usize = 0;
const BODY: usize = 1;

impl FakeDom {
    pub fn new() -> Self {
        let root = FakeNode { tag: "html".into(), children: vec![BODY], ..FakeNode::default() };
        let body = FakeNode { tag: "body".into(), parent: Some(ROOT), ..FakeNode::default() };
        Self { nodes: RefCell::new(vec![root, body]), scroll_y: Cell::new(0.0) }
    }

    pub fn body_node(&self) -> NodeId {
        NodeId(BODY)
    }

    /// Append a child described as `tag#id.class.class` to `parent`.
    pub fn append(&self, parent: NodeId, descriptor: &str) -> NodeId {
        let parsed = Compound::parse(descriptor);
        let mut nodes = self.nodes.borrow_mut();
        let index = nodes.len();
        nodes.push(FakeNode {
            tag: parsed.tag.unwrap_or_else(|| "div".into()),
            id: parsed.id,
            classes: parsed.classes,
            parent: Some(parent.0),
            ..FakeNode::default()
        });
        nodes[parent.0].children.push(index);
        NodeId(index)
    }

    pub fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].attrs.insert(name.into(), value.into());
    }

    pub fn set_geometry(&self, node: NodeId, offset_top: f64, client_height: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].offset_top = offset_top;
        nodes[node.0].client_height = client_height;
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].html.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].style.get(property).cloned()
    }

    fn descendants(&self, scope: usize) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<usize> = nodes[scope].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(nodes[next].children.iter().rev().copied());
        }
        out
    }

    fn select(&self, scope: usize, selector: &str) -> Vec<NodeId> {
        let list = parse_list(selector);
        let candidates = self.descendants(scope);
        let nodes = self.nodes.borrow();
        candidates
            .into_iter()
            .filter(|&i| list.iter().any(|c| c.matches(&nodes[i])))
            .map(NodeId)
            .collect()
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        Some(NodeId(BODY))
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.select(ROOT, &format!("#{id}")).into_iter().next()
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select(ROOT, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(ROOT, selector)
    }

    fn query_in(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.select(scope.0, selector).into_iter().next()
    }

    fn query_all_in(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(scope.0, selector)
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let list = parse_list(selector);
        let nodes = self.nodes.borrow();
        let mut cursor = Some(node.0);
        while let Some(i) = cursor {
            if list.iter().any(|c| c.matches(&nodes[i])) {
                return Some(NodeId(i));
            }
            cursor = nodes[i].parent;
        }
        None
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        if name == "id" {
            return nodes[node.0].id.clone();
        }
        nodes[node.0].attrs.get(name).cloned()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if !nodes[node.0].classes.iter().any(|c| c == class) {
            nodes[node.0].classes.push(class.into());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = self.nodes.borrow()[node.0].text.clone();
        for child in self.descendants(node.0) {
            out.push_str(&self.nodes.borrow()[child].text);
        }
        out
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].children.clear();
        nodes[node.0].text = text.into();
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].children.clear();
        nodes[node.0].text.clear();
        nodes[node.0].html = html.into();
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].style.insert(property.into(), value.into());
    }

    fn value(&self, node: &NodeId) -> String {
        self.nodes.borrow()[node.0].value.clone()
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.nodes.borrow_mut()[node.0].value = value.into();
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[node.0].offset_top
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[node.0].client_height
    }
}
