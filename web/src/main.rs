use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteFooter, SiteHead};
use ui::views::{Art, Home, Projects, Publications};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/publications")]
    Publications {},
    #[route("/research/projects")]
    Projects {},
    #[route("/art")]
    Art {},
}

fn nav_link(url: &str, label: &str, class: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: url.to_string(),
        "{label}"
    })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the selected locale back into this signal.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { internal: nav_link });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        SiteHead {}

        div { style: "display:none", "lang={lang_code()}" }
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Shared chrome around every routed page.
#[component]
fn WebLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AppNavbar { current_path: route.to_string() }
        main { class: "site-main",
            Outlet::<Route> {}
        }
        SiteFooter {}
    }
}
