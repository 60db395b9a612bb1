//! Composition root for the portfolio page.
//!
//! [`Portfolio`] owns one controller per behavior and is the only thing the
//! host talks to: [`Portfolio::mount`] once the document has loaded, then
//! [`Portfolio::handle`] for every DOM event. Handlers return an [`Action`]
//! when the host has follow-up work to schedule.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::carousel::{CertificateCarousel, HeroCarousel};
use crate::config::PageConfig;
use crate::dom::Dom;
use crate::nav::NavController;
use crate::skills::{PendingReveal, SkillPanel};
use crate::stats::{self, Platform, StatsEditor};
use crate::store::KeyValueStore;
use crate::theme::ThemeController;

/// A DOM event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    /// The mobile menu toggle was clicked.
    MenuToggle,
    /// A link in the nav list was clicked.
    NavLinkClick,
    /// The window scrolled.
    Scroll,
    /// The theme switcher was clicked.
    ThemeToggle,
    /// The hero carousel interval fired.
    HeroTick,
    CertificateNext,
    CertificatePrev,
    /// A skill item was clicked.
    SkillClick(N),
    /// A platform edit button was clicked.
    EditClick(N),
    /// The modal's close control was clicked.
    ModalClose,
    /// Any click in the window, with its target element.
    WindowClick(N),
    /// The stats form was submitted. The host suppresses the browser's
    /// own submission.
    Submit,
    /// A previously scheduled reveal is due.
    RevealDue(N),
    /// Another tab changed the store. `None` means the store was cleared.
    StorageChanged(Option<String>),
}

/// Follow-up work for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<N> {
    None,
    /// Deliver [`PageEvent::RevealDue`] for `panel` after `delay_ms`.
    ScheduleReveal { panel: N, delay_ms: u32 },
}

pub struct Portfolio<D: Dom> {
    config: PageConfig,
    nav: NavController<D>,
    theme: ThemeController<D>,
    hero: Option<HeroCarousel<D>>,
    certificates: Option<CertificateCarousel<D>>,
    skills: SkillPanel<D>,
    stats: StatsEditor<D>,
}

impl<D: Dom> Portfolio<D> {
    /// Attach to the loaded page and run every load-time routine.
    #[must_use]
    pub fn mount<S: KeyValueStore + ?Sized>(dom: &D, store: &S, config: PageConfig) -> Self {
        let page = Self {
            nav: NavController::mount(dom, &config),
            theme: ThemeController::mount(dom, &config),
            hero: HeroCarousel::mount(dom),
            certificates: CertificateCarousel::mount(dom),
            skills: SkillPanel::mount(dom),
            stats: StatsEditor::mount(dom),
            config,
        };
        page.theme.apply_saved(dom, store);
        if let Some(section) = page.nav.highlight(dom) {
            log::debug!("initial section: {section}");
        }
        stats::load_persisted(dom, store);
        log::info!(
            "portfolio mounted: {} nav links, hero {}, certificates {}, {} skills",
            page.nav.links().len(),
            if page.hero.is_some() { "on" } else { "off" },
            if page.certificates.is_some() { "on" } else { "off" },
            page.skills.items().len(),
        );
        page
    }

    /// Hero carousel interval, or `None` when there are no hero images and
    /// no timer should be scheduled.
    #[must_use]
    pub fn hero_interval(&self) -> Option<u32> {
        self.hero.as_ref().map(|_| self.config.hero_interval_ms)
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn nav(&self) -> &NavController<D> {
        &self.nav
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController<D> {
        &self.theme
    }

    #[must_use]
    pub fn hero(&self) -> Option<&HeroCarousel<D>> {
        self.hero.as_ref()
    }

    #[must_use]
    pub fn certificates(&self) -> Option<&CertificateCarousel<D>> {
        self.certificates.as_ref()
    }

    #[must_use]
    pub fn skills(&self) -> &SkillPanel<D> {
        &self.skills
    }

    #[must_use]
    pub fn stats(&self) -> &StatsEditor<D> {
        &self.stats
    }

    /// Dispatch one event to the controller that owns it.
    pub fn handle<S: KeyValueStore + ?Sized>(&mut self, dom: &D, store: &S, event: PageEvent<D::Node>) -> Action<D::Node> {
        match event {
            PageEvent::MenuToggle => self.nav.toggle_menu(dom),
            PageEvent::NavLinkClick => self.nav.on_link_click(dom),
            PageEvent::Scroll => {
                if let Some(section) = self.nav.highlight(dom) {
                    log::trace!("scrolled into {section}");
                }
            }
            PageEvent::ThemeToggle => {
                self.theme.toggle(dom, store);
            }
            PageEvent::HeroTick => {
                if let Some(hero) = &mut self.hero {
                    hero.advance(dom);
                }
            }
            PageEvent::CertificateNext => {
                if let Some(certificates) = &mut self.certificates {
                    certificates.next(dom);
                }
            }
            PageEvent::CertificatePrev => {
                if let Some(certificates) = &mut self.certificates {
                    certificates.prev(dom);
                }
            }
            PageEvent::SkillClick(item) => {
                if let Some(PendingReveal { panel }) = self.skills.on_click(dom, &item) {
                    return Action::ScheduleReveal { panel, delay_ms: self.config.reveal_delay_ms };
                }
            }
            PageEvent::RevealDue(panel) => PendingReveal { panel }.apply(dom),
            PageEvent::EditClick(button) => {
                if let Err(e) = self.stats.on_edit_click(dom, &button) {
                    log::warn!("stats: ignoring edit click: {e}");
                }
            }
            PageEvent::ModalClose => self.stats.cancel(dom),
            PageEvent::WindowClick(target) => self.stats.on_window_click(dom, &target),
            PageEvent::Submit => {
                self.stats.submit(dom, store);
            }
            PageEvent::StorageChanged(key) => self.reconcile(dom, store, key.as_deref()),
        }
        Action::None
    }

    /// Re-apply whatever another tab changed. Last write still wins.
    fn reconcile<S: KeyValueStore + ?Sized>(&self, dom: &D, store: &S, key: Option<&str>) {
        match key {
            None => {
                self.theme.apply_saved(dom, store);
                stats::load_persisted(dom, store);
            }
            Some(key) if key == self.theme.key() => {
                self.theme.apply_saved(dom, store);
            }
            Some(key) => {
                if let Some(platform) = Platform::from_storage_key(key) {
                    stats::load_platform(dom, store, platform);
                }
            }
        }
        log::debug!("page: reconciled storage change {key:?}");
    }
}
