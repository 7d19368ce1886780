use crate::content::{self, NavLink};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` so `ui` can render internal router links
/// without knowing each platform's `Route` enum.
///
/// Links from `navigation.json` that start with `http` are rendered here as
/// plain anchors opening in a new tab; every other link is handed to
/// `internal` along with its label and CSS class (which carries the active
/// modifier).
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn nav_link(url: &str, label: &str, class: &str) -> Element {
///     rsx!(Link { class: "{class}", to: url.to_string(), "{label}" })
/// }
/// register_nav(NavBuilder { internal: nav_link });
/// ```
pub struct NavBuilder {
    pub internal: fn(url: &str, label: &str, class: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// CSS class for a nav link, with the active modifier when it matches `current_path`.
pub fn link_class(link: &NavLink, current_path: &str) -> &'static str {
    if link.is_active(current_path) {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

fn render_link(link: &NavLink, current_path: &str) -> Element {
    let class = link_class(link, current_path);

    if link.is_external() {
        return rsx! {
            a {
                class: "{class}",
                href: "{link.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{link.title}"
            }
        };
    }

    match NAV_BUILDER.get() {
        Some(builder) => (builder.internal)(&link.url, &link.title, class),
        None => rsx! {
            a { class: "{class}", href: "{link.url}", "{link.title}" }
        },
    }
}

#[component]
pub fn AppNavbar(current_path: String) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("language switch to {val} failed: {err}"),
        }
    };

    let (brand, links) = match content::site() {
        Ok(site) => (site.site.title.clone(), site.navigation.links.clone()),
        Err(_) => (String::new(), Vec::new()),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "{brand}" }
                }

                nav { class: "navbar__links",
                    for link in links.iter() {
                        {render_link(link, &current_path)}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
