//! Persisted light/dark theme.
//!
//! The preference lives in the store under the configured theme key as
//! `"light"` or `"dark"`. The applied state is the `.dark-mode` class on
//! `<body>` plus a sun or moon icon inside the theme switcher.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::PageConfig;
use crate::consts::{DARK_MODE_CLASS, MOON_ICON_HTML, SUN_ICON_HTML, THEME_SWITCHER_SELECTOR};
use crate::dom::Dom;
use crate::store::{KeyValueStore, read_or_warn, write_or_warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only an exact `"dark"` selects the
    /// dark theme; anything else, including no value, is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Markup placed inside the theme switcher.
    #[must_use]
    pub fn icon_html(self) -> &'static str {
        match self {
            Self::Light => SUN_ICON_HTML,
            Self::Dark => MOON_ICON_HTML,
        }
    }
}

pub struct ThemeController<D: Dom> {
    switcher: Option<D::Node>,
    body: Option<D::Node>,
    key: String,
}

impl<D: Dom> ThemeController<D> {
    #[must_use]
    pub fn mount(dom: &D, config: &PageConfig) -> Self {
        Self { switcher: dom.query(THEME_SWITCHER_SELECTOR), body: dom.body(), key: config.theme_key.clone() }
    }

    /// The theme switcher control, for event wiring.
    #[must_use]
    pub fn switcher(&self) -> Option<&D::Node> {
        self.switcher.as_ref()
    }

    /// Storage key holding the preference.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The theme currently applied to the page.
    #[must_use]
    pub fn current(&self, dom: &D) -> Theme {
        match &self.body {
            Some(body) if dom.has_class(body, DARK_MODE_CLASS) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Read the stored preference and apply it.
    pub fn apply_saved<S: KeyValueStore + ?Sized>(&self, dom: &D, store: &S) -> Theme {
        let theme = Theme::from_stored(read_or_warn(store, &self.key).as_deref());
        self.apply(dom, theme);
        theme
    }

    /// Invert the applied theme and persist the new preference.
    pub fn toggle<S: KeyValueStore + ?Sized>(&self, dom: &D, store: &S) -> Theme {
        let next = self.current(dom).toggled();
        self.apply(dom, next);
        write_or_warn(store, &self.key, next.as_str());
        log::debug!("theme: switched to {}", next.as_str());
        next
    }

    fn apply(&self, dom: &D, theme: Theme) {
        if let Some(body) = &self.body {
            dom.set_class(body, DARK_MODE_CLASS, theme == Theme::Dark);
        }
        if let Some(switcher) = &self.switcher {
            dom.set_inner_html(switcher, theme.icon_html());
        }
    }
}
