use dioxus::prelude::*;

use crate::content;

/// Document title and description from `site.json`.
#[component]
pub fn SiteHead() -> Element {
    let Ok(site) = content::site() else {
        return rsx! {};
    };
    let config = &site.site;

    rsx! {
        document::Title { "{config.title}" }
        document::Meta { name: "description", content: "{config.description}" }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let footer = content::site()
        .map(|site| site.site.footer.clone())
        .unwrap_or_default();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                p { "{footer}" }
            }
        }
    }
}
