#![cfg(test)]
/*!
Theme selector lint.

Purpose:
- Ensure that the CSS selectors the shared components rely on remain present in
  ui/assets/theme/main.css and ui/assets/styling/navbar.css.
- Fail fast if a refactor accidentally drops or renames core classes.

How it works:
- Both stylesheets are embedded with `include_str!` and checked for a curated set
  of selectors / tokens by substring.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__header",
    ".page__lede",
    ".separator",
    ".visually-hidden",
    // Buttons & badges
    ".button {",
    ".button--ghost",
    ".badge {",
    ".badge--secondary",
    ".badge--outline",
    // Home
    ".page-home__body",
    ".social-link {",
    // Publications: stats & charts
    ".pub-highlights",
    ".pub-highlight__value",
    ".pub-charts",
    ".pub-chart__bar",
    ".pub-chart__placeholder",
    // Publications: filters & list
    ".pub-filters",
    ".pub-filters__select",
    ".pub-filters__toggle",
    ".pub-list__year-heading",
    ".pub-list__placeholder",
    ".pub-card",
    ".pub-card__citations",
    // Projects
    ".project-card",
    ".project-card__gallery",
    ".project-output--presentation",
    // Art
    ".art-filter--active",
    ".art-grid",
    ".art-empty",
    // Chrome
    ".site-footer",
    ".page-error",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn navbar_styles_cover_active_link() {
    let has_link = NAVBAR_CSS.contains(".navbar__link {");
    let has_active = NAVBAR_CSS.contains(".navbar__link--active");
    assert!(
        has_link && has_active,
        "Navbar link selectors missing (link: {has_link}, active: {has_active})"
    );
}
