//! Coding-platform stats: display, persistence, and the edit modal.
//!
//! DESIGN
//! ======
//! Each platform card (`#<platform id>`) shows a solved-problem count and
//! one rating-like field. Both are persisted as opaque text under
//! `<id>_problemsSolved` and `<id>_rating`. On load the persisted values
//! replace the markup defaults; a key that was never written leaves the
//! default in place.
//!
//! The editor is a two-state machine. An edit button opens the modal for
//! exactly one platform, pre-filled from what the card currently shows.
//! Submitting trims both inputs, persists them, updates the card, and
//! closes the modal. The close control or a click on the backdrop closes
//! it without touching anything. Free text is accepted in both fields.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{
    DISPLAY_NAME_INPUT_ID, EDIT_BUTTON_SELECTOR, EDIT_FORM_ID, EDIT_MODAL_ID, EDIT_PLATFORM_ATTR, MODAL_ACTIVE_CLASS,
    MODAL_CLOSE_SELECTOR, PROBLEMS_DISPLAY_SELECTOR, PROBLEMS_INPUT_ID, PROBLEMS_KEY_SUFFIX, RATING_DISPLAY_SELECTOR,
    RATING_INPUT_ID, RATING_KEY_SUFFIX,
};
use crate::dom::Dom;
use crate::error::UnknownPlatform;
use crate::store::{KeyValueStore, read_or_warn, write_or_warn};

/// The coding platforms shown on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    LeetCode,
    GeeksforGeeks,
    Codeforces,
    CodeStudio,
    HackerRank,
    CodeChef,
    Codolio,
}

impl Platform {
    pub const ALL: [Self; 7] = [
        Self::LeetCode,
        Self::GeeksforGeeks,
        Self::Codeforces,
        Self::CodeStudio,
        Self::HackerRank,
        Self::CodeChef,
        Self::Codolio,
    ];

    /// Identifier used as the card's element id, the edit button's
    /// `data-platform`, and the storage key prefix.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::LeetCode => "leetcode",
            Self::GeeksforGeeks => "geeksforgeeks",
            Self::Codeforces => "codeforces",
            Self::CodeStudio => "codestudio",
            Self::HackerRank => "hackerrank",
            Self::CodeChef => "codechef",
            Self::Codolio => "codolio",
        }
    }

    /// Name shown in the edit modal. Two platforms carry their brand
    /// capitalization; the rest capitalize only the first letter of the id.
    #[must_use]
    pub fn display_name(self) -> String {
        match self {
            Self::GeeksforGeeks => "GeeksforGeeks".into(),
            Self::CodeStudio => "CodeStudio".into(),
            other => capitalize_first(other.id()),
        }
    }

    #[must_use]
    pub fn problems_key(self) -> String {
        format!("{}{PROBLEMS_KEY_SUFFIX}", self.id())
    }

    #[must_use]
    pub fn rating_key(self) -> String {
        format!("{}{RATING_KEY_SUFFIX}", self.id())
    }

    /// The platform whose storage key is `key`, if any.
    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        let id = key.strip_suffix(PROBLEMS_KEY_SUFFIX).or_else(|| key.strip_suffix(RATING_KEY_SUFFIX))?;
        Self::from_id(id)
    }

    /// The platform with identifier `id`, if any.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownPlatform(s.to_owned()))
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One platform's two stat fields, as opaque text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformStat {
    pub problems_solved: String,
    pub rating: String,
}

impl PlatformStat {
    /// Build from raw input values, trimming surrounding whitespace.
    #[must_use]
    pub fn from_input(problems_solved: &str, rating: &str) -> Self {
        Self { problems_solved: problems_solved.trim().to_owned(), rating: rating.trim().to_owned() }
    }
}

/// Where the editor is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Editing(Platform),
}

pub struct StatsEditor<D: Dom> {
    modal: Option<D::Node>,
    close: Option<D::Node>,
    form: Option<D::Node>,
    name_input: Option<D::Node>,
    problems_input: Option<D::Node>,
    rating_input: Option<D::Node>,
    edit_buttons: Vec<D::Node>,
    state: EditorState,
}

impl<D: Dom> StatsEditor<D> {
    #[must_use]
    pub fn mount(dom: &D) -> Self {
        let modal = dom.by_id(EDIT_MODAL_ID);
        let close = modal.as_ref().and_then(|m| dom.query_in(m, MODAL_CLOSE_SELECTOR));
        Self {
            modal,
            close,
            form: dom.by_id(EDIT_FORM_ID),
            name_input: dom.by_id(DISPLAY_NAME_INPUT_ID),
            problems_input: dom.by_id(PROBLEMS_INPUT_ID),
            rating_input: dom.by_id(RATING_INPUT_ID),
            edit_buttons: dom.query_all(EDIT_BUTTON_SELECTOR),
            state: EditorState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The modal overlay, compared against window click targets.
    #[must_use]
    pub fn modal(&self) -> Option<&D::Node> {
        self.modal.as_ref()
    }

    /// The modal's close control, for event wiring.
    #[must_use]
    pub fn close_control(&self) -> Option<&D::Node> {
        self.close.as_ref()
    }

    /// The edit form, for submit wiring.
    #[must_use]
    pub fn form(&self) -> Option<&D::Node> {
        self.form.as_ref()
    }

    /// Every per-platform edit button, for event wiring.
    #[must_use]
    pub fn edit_buttons(&self) -> &[D::Node] {
        &self.edit_buttons
    }

    // --- Transitions ---

    /// An edit button was clicked. Reads the platform from the button's
    /// `data-platform` and opens the modal for it.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPlatform`] when the attribute is missing or names a
    /// platform outside [`Platform::ALL`]; the editor stays as it was.
    pub fn on_edit_click(&mut self, dom: &D, button: &D::Node) -> Result<Platform, UnknownPlatform> {
        let platform: Platform = dom.attr(button, EDIT_PLATFORM_ATTR).unwrap_or_default().parse()?;
        self.open(dom, platform);
        Ok(platform)
    }

    /// Idle → Editing: pre-fill the form and show the modal.
    pub fn open(&mut self, dom: &D, platform: Platform) {
        self.state = EditorState::Editing(platform);

        if let Some(input) = &self.name_input {
            dom.set_value(input, &platform.display_name());
        }
        let (problems_display, rating_display) = card_fields(dom, platform);
        if let (Some(input), Some(display)) = (&self.problems_input, problems_display) {
            dom.set_value(input, dom.text(&display).trim());
        }
        if let (Some(input), Some(display)) = (&self.rating_input, rating_display) {
            dom.set_value(input, dom.text(&display).trim());
        }
        if let Some(modal) = &self.modal {
            dom.add_class(modal, MODAL_ACTIVE_CLASS);
        }
        log::debug!("stats: editing {platform}");
    }

    /// Editing → Idle without saving.
    pub fn cancel(&mut self, dom: &D) {
        self.state = EditorState::Idle;
        self.hide(dom);
    }

    /// A click landed somewhere in the window. Only a click on the modal
    /// backdrop itself, not its content, cancels the edit.
    pub fn on_window_click(&mut self, dom: &D, target: &D::Node) {
        if self.modal.as_ref() == Some(target) {
            self.cancel(dom);
        }
    }

    /// Editing → Idle, saving the form. Returns the saved stat, or `None`
    /// when no edit session is open.
    pub fn submit<S: KeyValueStore + ?Sized>(&mut self, dom: &D, store: &S) -> Option<PlatformStat> {
        let EditorState::Editing(platform) = self.state else {
            return None;
        };

        let read = |input: &Option<D::Node>| input.as_ref().map(|i| dom.value(i)).unwrap_or_default();
        let stat = PlatformStat::from_input(&read(&self.problems_input), &read(&self.rating_input));

        write_or_warn(store, &platform.problems_key(), &stat.problems_solved);
        write_or_warn(store, &platform.rating_key(), &stat.rating);

        let (problems_display, rating_display) = card_fields(dom, platform);
        if let Some(node) = problems_display {
            dom.set_text(&node, &stat.problems_solved);
        }
        if let Some(node) = rating_display {
            dom.set_text(&node, &stat.rating);
        }

        self.state = EditorState::Idle;
        self.hide(dom);
        log::debug!("stats: saved {platform}");
        Some(stat)
    }

    fn hide(&self, dom: &D) {
        if let Some(modal) = &self.modal {
            dom.remove_class(modal, MODAL_ACTIVE_CLASS);
        }
    }
}

// =============================================================================
// Display
// =============================================================================

/// Replace every card's displayed fields with its persisted values.
pub fn load_persisted<D: Dom, S: KeyValueStore + ?Sized>(dom: &D, store: &S) {
    for platform in Platform::ALL {
        load_platform(dom, store, platform);
    }
}

/// Replace one card's displayed fields with its persisted values. A key
/// that was never written leaves the displayed default alone.
pub fn load_platform<D: Dom, S: KeyValueStore + ?Sized>(dom: &D, store: &S, platform: Platform) {
    let (problems_display, rating_display) = card_fields(dom, platform);
    if let (Some(value), Some(node)) = (read_or_warn(store, &platform.problems_key()), problems_display) {
        dom.set_text(&node, &value);
    }
    if let (Some(value), Some(node)) = (read_or_warn(store, &platform.rating_key()), rating_display) {
        dom.set_text(&node, &value);
    }
}

/// What the card for `platform` currently shows, trimmed. `None` when the
/// card or either of its fields is missing from the page.
pub fn displayed<D: Dom>(dom: &D, platform: Platform) -> Option<PlatformStat> {
    let (problems, rating) = card_fields(dom, platform);
    let (problems, rating) = (problems?, rating?);
    Some(PlatformStat::from_input(&dom.text(&problems), &dom.text(&rating)))
}

/// The problems-solved and rating display elements of a platform card.
fn card_fields<D: Dom>(dom: &D, platform: Platform) -> (Option<D::Node>, Option<D::Node>) {
    match dom.by_id(platform.id()) {
        Some(card) => (dom.query_in(&card, PROBLEMS_DISPLAY_SELECTOR), dom.query_in(&card, RATING_DISPLAY_SELECTOR)),
        None => (None, None),
    }
}
