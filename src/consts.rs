//! Class names, selectors, and storage keys shared with the page markup.

// ── Navigation ──────────────────────────────────────────────────

pub const MENU_TOGGLE_SELECTOR: &str = ".hamburger";
pub const NAV_LIST_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const SECTION_SELECTOR: &str = "section[id]";

/// Applied to the nav list while the mobile menu is open.
pub const MENU_OPEN_CLASS: &str = "nav-active";
/// Applied to the menu toggle to animate it into a close icon.
pub const MENU_TOGGLE_CLASS: &str = "toggle";
/// Applied to `<body>` to lock background scrolling.
pub const SCROLL_LOCK_CLASS: &str = "no-scroll";
pub const NAV_ACTIVE_CLASS: &str = "active";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_SWITCHER_SELECTOR: &str = ".theme-switcher";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const SUN_ICON_HTML: &str = r#"<i class="fas fa-sun"></i>"#;
pub const MOON_ICON_HTML: &str = r#"<i class="fas fa-moon"></i>"#;

// ── Carousels ───────────────────────────────────────────────────

pub const HERO_CONTAINER_SELECTOR: &str = ".hero-images";
pub const HERO_IMAGE_SELECTOR: &str = "img";
pub const HERO_ACTIVE_CLASS: &str = "active-image";

pub const CERTIFICATE_SELECTOR: &str = ".certificate-item";
pub const CERTIFICATE_PREV_ID: &str = "prevCert";
pub const CERTIFICATE_NEXT_ID: &str = "nextCert";
pub const CERTIFICATE_ACTIVE_CLASS: &str = "active-cert";

// ── Skills ──────────────────────────────────────────────────────

pub const SKILL_ITEM_SELECTOR: &str = ".skill-item";
pub const SKILL_CATEGORY_SELECTOR: &str = ".skill-category";
pub const SKILL_DETAIL_SELECTOR: &str = ".skill-detail";
pub const SKILL_HIGHLIGHT_CLASS: &str = "highlighted-skill";
pub const SKILL_HIGHLIGHT_SELECTOR: &str = ".highlighted-skill";
pub const SKILL_DETAIL_ATTR: &str = "data-detail";
pub const SKILL_DETAIL_ACTIVE_CLASS: &str = "active";

// ── Stats editor ────────────────────────────────────────────────

pub const EDIT_MODAL_ID: &str = "manual-update-modal";
pub const MODAL_CLOSE_SELECTOR: &str = ".close-button";
pub const EDIT_FORM_ID: &str = "update-stats-form";
pub const DISPLAY_NAME_INPUT_ID: &str = "platform-display-name";
pub const PROBLEMS_INPUT_ID: &str = "problems-solved-input";
pub const RATING_INPUT_ID: &str = "rating-input";
pub const EDIT_BUTTON_SELECTOR: &str = ".edit-stats-btn";
pub const EDIT_PLATFORM_ATTR: &str = "data-platform";
pub const MODAL_ACTIVE_CLASS: &str = "active";

pub const PROBLEMS_DISPLAY_SELECTOR: &str = ".problems-solved";
/// Each card shows exactly one of these rating-like fields.
pub const RATING_DISPLAY_SELECTOR: &str = ".contest-rating, .max-rating, .overall-rank, .overall-badges, .courses-completed, .contests-participated";

/// Storage key suffix for a platform's solved-problem count.
pub const PROBLEMS_KEY_SUFFIX: &str = "_problemsSolved";
/// Storage key suffix for a platform's rating, rank, or badge text.
pub const RATING_KEY_SUFFIX: &str = "_rating";

// ── Config ──────────────────────────────────────────────────────

/// Inline `<script type="application/json">` element holding a `PageConfig`.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";
