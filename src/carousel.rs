//! Hero and certificate carousels.
//!
//! Both keep exactly one item of a non-empty sequence marked active. The
//! hero carousel advances on a host timer; the certificate carousel moves
//! only when its prev/next controls are clicked. An empty sequence mounts
//! to `None`, so no timer or handler ever runs for it.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::{
    CERTIFICATE_ACTIVE_CLASS, CERTIFICATE_NEXT_ID, CERTIFICATE_PREV_ID, CERTIFICATE_SELECTOR, HERO_ACTIVE_CLASS,
    HERO_CONTAINER_SELECTOR, HERO_IMAGE_SELECTOR,
};
use crate::dom::Dom;

/// Wrapping index over a non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    /// Start at index 0. `None` for an empty sequence.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Step forward, wrapping from the last item to the first.
    pub fn forward(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Step backward, wrapping from the first item to the last.
    pub fn backward(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}

// =============================================================================
// Hero
// =============================================================================

pub struct HeroCarousel<D: Dom> {
    images: Vec<D::Node>,
    rotation: Rotation,
}

impl<D: Dom> HeroCarousel<D> {
    /// Collect the images of every hero container in document order and
    /// mark the first one active.
    #[must_use]
    pub fn mount(dom: &D) -> Option<Self> {
        let images: Vec<D::Node> = dom
            .query_all(HERO_CONTAINER_SELECTOR)
            .iter()
            .flat_map(|container| dom.query_all_in(container, HERO_IMAGE_SELECTOR))
            .collect();
        let rotation = Rotation::new(images.len())?;
        dom.add_class(&images[0], HERO_ACTIVE_CLASS);
        Some(Self { images, rotation })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.rotation.index()
    }

    /// Timer tick: move the active marker to the next image.
    pub fn advance(&mut self, dom: &D) {
        dom.remove_class(&self.images[self.rotation.index()], HERO_ACTIVE_CLASS);
        let next = self.rotation.forward();
        dom.add_class(&self.images[next], HERO_ACTIVE_CLASS);
    }
}

// =============================================================================
// Certificates
// =============================================================================

pub struct CertificateCarousel<D: Dom> {
    items: Vec<D::Node>,
    rotation: Rotation,
    prev: Option<D::Node>,
    next: Option<D::Node>,
}

impl<D: Dom> CertificateCarousel<D> {
    /// Collect the certificate items and show the first one.
    #[must_use]
    pub fn mount(dom: &D) -> Option<Self> {
        let items = dom.query_all(CERTIFICATE_SELECTOR);
        let rotation = Rotation::new(items.len())?;
        let carousel =
            Self { items, rotation, prev: dom.by_id(CERTIFICATE_PREV_ID), next: dom.by_id(CERTIFICATE_NEXT_ID) };
        carousel.show(dom);
        Some(carousel)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.rotation.index()
    }

    /// The "previous" control, if the page has one.
    #[must_use]
    pub fn prev_control(&self) -> Option<&D::Node> {
        self.prev.as_ref()
    }

    /// The "next" control, if the page has one.
    #[must_use]
    pub fn next_control(&self) -> Option<&D::Node> {
        self.next.as_ref()
    }

    pub fn next(&mut self, dom: &D) {
        self.rotation.forward();
        self.show(dom);
    }

    pub fn prev(&mut self, dom: &D) {
        self.rotation.backward();
        self.show(dom);
    }

    /// Rewrite the visibility of every item, not just the changed pair.
    fn show(&self, dom: &D) {
        let current = self.rotation.index();
        for (i, item) in self.items.iter().enumerate() {
            let active = i == current;
            dom.set_class(item, CERTIFICATE_ACTIVE_CLASS, active);
            dom.set_style(item, "opacity", if active { "1" } else { "0" });
            dom.set_style(item, "pointer-events", if active { "auto" } else { "none" });
        }
    }
}
