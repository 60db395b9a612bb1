use super::*;
use crate::fake::{FakeDom, NodeId};

// =============================================================
// Helpers
// =============================================================

struct NavPage {
    dom: FakeDom,
    toggle: NodeId,
    menu: NodeId,
    about: NodeId,
    projects: NodeId,
    contact: NodeId,
}

/// Header, nav with three links, and three stacked 500px sections
/// starting at y=100.
fn nav_page() -> NavPage {
    let dom = FakeDom::new();
    let body = dom.body_node();
    let header = dom.append(body, "header");
    let toggle = dom.append(header, "div.hamburger");
    let menu = dom.append(header, "ul.nav-links");
    let mut links = Vec::new();
    for id in ["about", "projects", "contact"] {
        let li = dom.append(menu, "li");
        let a = dom.append(li, "a");
        dom.set_attr(a, "href", &format!("#{id}"));
        links.push(a);
    }
    for (i, id) in ["about", "projects", "contact"].into_iter().enumerate() {
        let section = dom.append(body, &format!("section#{id}"));
        dom.set_geometry(section, 100.0 + 500.0 * i as f64, 500.0);
    }
    NavPage { dom, toggle, menu, about: links[0], projects: links[1], contact: links[2] }
}

fn active_links(page: &NavPage) -> Vec<NodeId> {
    [page.about, page.projects, page.contact]
        .into_iter()
        .filter(|l| page.dom.has_class(l, NAV_ACTIVE_CLASS))
        .collect()
}

fn spans() -> Vec<SectionSpan> {
    vec![
        SectionSpan { id: "about".into(), top: 100.0, height: 500.0 },
        SectionSpan { id: "projects".into(), top: 600.0, height: 500.0 },
    ]
}

// =============================================================
// section_at
// =============================================================

#[test]
fn section_at_inside_first_span() {
    assert_eq!(section_at(100.0, &spans(), 80.0), Some("about"));
}

#[test]
fn section_at_applies_header_offset() {
    // about spans [20, 520) once the 80px header is subtracted.
    assert_eq!(section_at(20.0, &spans(), 80.0), Some("about"));
    assert_eq!(section_at(19.0, &spans(), 80.0), None);
    assert_eq!(section_at(520.0, &spans(), 80.0), Some("projects"));
}

#[test]
fn section_at_past_last_span_is_none() {
    assert_eq!(section_at(1020.0, &spans(), 80.0), None);
}

#[test]
fn section_at_empty_is_none() {
    assert_eq!(section_at(0.0, &[], 80.0), None);
}

#[test]
fn section_at_overlap_prefers_later_section() {
    let overlapping = vec![
        SectionSpan { id: "a".into(), top: 0.0, height: 1000.0 },
        SectionSpan { id: "b".into(), top: 200.0, height: 100.0 },
    ];
    assert_eq!(section_at(250.0, &overlapping, 0.0), Some("b"));
}

// =============================================================
// link_targets
// =============================================================

#[test]
fn link_targets_matches_fragment() {
    assert!(link_targets("#about", "about"));
    assert!(link_targets("index.html#about", "about"));
    assert!(!link_targets("#about-me", "about"));
    assert!(!link_targets("#projects", "about"));
}

#[test]
fn link_targets_bare_href() {
    assert!(link_targets("about", "about"));
    assert!(!link_targets("/about", "about"));
}

// =============================================================
// Menu toggle
// =============================================================

#[test]
fn toggle_opens_all_three_together() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    nav.toggle_menu(&page.dom);
    assert!(page.dom.has_class(&page.menu, MENU_OPEN_CLASS));
    assert!(page.dom.has_class(&page.toggle, MENU_TOGGLE_CLASS));
    assert!(page.dom.has_class(&page.dom.body_node(), SCROLL_LOCK_CLASS));
    assert!(nav.is_open(&page.dom));
}

#[test]
fn toggle_twice_closes() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    nav.toggle_menu(&page.dom);
    nav.toggle_menu(&page.dom);
    assert!(!page.dom.has_class(&page.menu, MENU_OPEN_CLASS));
    assert!(!page.dom.has_class(&page.toggle, MENU_TOGGLE_CLASS));
    assert!(!page.dom.has_class(&page.dom.body_node(), SCROLL_LOCK_CLASS));
}

#[test]
fn toggle_resyncs_drifted_classes() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    // Toggle animation left on by something else while the menu is closed.
    page.dom.add_class(&page.toggle, MENU_TOGGLE_CLASS);
    nav.toggle_menu(&page.dom);
    assert!(page.dom.has_class(&page.menu, MENU_OPEN_CLASS));
    assert!(page.dom.has_class(&page.toggle, MENU_TOGGLE_CLASS));
    nav.toggle_menu(&page.dom);
    assert!(!page.dom.has_class(&page.toggle, MENU_TOGGLE_CLASS));
}

#[test]
fn link_click_closes_open_menu() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    nav.toggle_menu(&page.dom);
    nav.on_link_click(&page.dom);
    assert!(!nav.is_open(&page.dom));
    assert!(!page.dom.has_class(&page.toggle, MENU_TOGGLE_CLASS));
    assert!(!page.dom.has_class(&page.dom.body_node(), SCROLL_LOCK_CLASS));
}

#[test]
fn link_click_with_closed_menu_changes_nothing() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    page.dom.add_class(&page.dom.body_node(), SCROLL_LOCK_CLASS);
    nav.on_link_click(&page.dom);
    // Desktop view: the lock was not set by the menu, so it stays.
    assert!(page.dom.has_class(&page.dom.body_node(), SCROLL_LOCK_CLASS));
}

#[test]
fn missing_toggle_still_toggles_menu() {
    let dom = FakeDom::new();
    let menu = dom.append(dom.body_node(), "ul.nav-links");
    let nav = NavController::mount(&dom, &PageConfig::default());
    assert!(nav.toggle_node().is_none());
    nav.toggle_menu(&dom);
    assert!(dom.has_class(&menu, MENU_OPEN_CLASS));
}

#[test]
fn empty_page_mounts_without_effect() {
    let dom = FakeDom::new();
    let nav = NavController::mount(&dom, &PageConfig::default());
    nav.toggle_menu(&dom);
    nav.on_link_click(&dom);
    assert_eq!(nav.highlight(&dom), None);
    assert!(nav.links().is_empty());
}

// =============================================================
// Scroll highlighting
// =============================================================

#[test]
fn highlight_marks_only_current_section() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    page.dom.set_scroll_y(700.0);
    assert_eq!(nav.highlight(&page.dom).as_deref(), Some("projects"));
    assert_eq!(active_links(&page), vec![page.projects]);
}

#[test]
fn highlight_moves_between_sections() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    page.dom.set_scroll_y(50.0);
    assert_eq!(nav.highlight(&page.dom).as_deref(), Some("about"));
    assert_eq!(active_links(&page), vec![page.about]);
    page.dom.set_scroll_y(1300.0);
    assert_eq!(nav.highlight(&page.dom).as_deref(), Some("contact"));
    assert_eq!(active_links(&page), vec![page.contact]);
}

#[test]
fn highlight_above_first_section_clears_all() {
    let page = nav_page();
    let nav = NavController::mount(&page.dom, &PageConfig::default());
    page.dom.set_scroll_y(700.0);
    assert!(nav.highlight(&page.dom).is_some());
    page.dom.set_scroll_y(0.0);
    assert_eq!(nav.highlight(&page.dom), None);
    assert!(active_links(&page).is_empty());
}

#[test]
fn highlight_uses_configured_offset() {
    let page = nav_page();
    let config = PageConfig { header_offset_px: 0.0, ..PageConfig::default() };
    let nav = NavController::mount(&page.dom, &config);
    page.dom.set_scroll_y(50.0);
    assert_eq!(nav.highlight(&page.dom), None);
}
