//! Behavior layer for the static portfolio page.
//!
//! This crate is compiled to WebAssembly and attaches to an already rendered
//! portfolio page. It owns every interactive behavior of the page: the mobile
//! menu and scroll-based nav highlighting, the persisted light/dark theme, the
//! hero and certificate carousels, the skill detail panel, and the coding
//! platform stats editor backed by `localStorage`.
//!
//! All behavior is written against the [`dom::Dom`] and
//! [`store::KeyValueStore`] traits so it can be tested without a browser.
//! The `web` feature supplies the `web-sys` implementations and the
//! `wasm-bindgen` start hook that wires DOM events to [`page::Portfolio`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Composition root: mounts every controller and dispatches [`page::PageEvent`]s |
//! | [`nav`] | Mobile menu toggle and scroll-position link highlighting |
//! | [`theme`] | Persisted light/dark theme |
//! | [`carousel`] | Hero (timer-driven) and certificate (button-driven) carousels |
//! | [`skills`] | Click-to-reveal skill detail panel |
//! | [`stats`] | Platform stats display and the edit modal state machine |
//! | [`dom`] | Host capability trait over the page's element tree |
//! | [`store`] | Persistent key/value store trait and in-memory implementation |
//! | [`config`] | Page tunables loaded from inline JSON |
//! | [`error`] | Error types |
//! | [`consts`] | Class names, selectors, and storage keys of the consumed markup |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod nav;
pub mod page;
pub mod skills;
pub mod stats;
pub mod store;
pub mod theme;

#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod fake;
