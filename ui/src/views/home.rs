use dioxus::prelude::*;

use crate::components::ContentUnavailable;
use crate::content::{self, SocialLink};

#[component]
pub fn Home() -> Element {
    let lang_marker = super::use_lang_marker();

    let site = match content::site() {
        Ok(site) => site,
        Err(err) => return rsx! { ContentUnavailable { reason: err.to_string() } },
    };
    let home = &site.home;
    let social = home.social.as_ref().map(|s| s.links()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            header { class: "page-home__header",
                h1 { class: "page-home__greeting",
                    "{home.greeting} "
                    span { class: "page-home__name", "{home.name}" }
                    if let Some(pronunciation) = home.pronunciation.as_ref() {
                        span { class: "page-home__pronunciation", " ({pronunciation})" }
                    }
                    "."
                }
                div { class: "page-home__role",
                    span { class: "badge badge--secondary", "{home.title}" }
                    span { "{home.at_label}" }
                    span { class: "page-home__institution", "{home.institution}" }
                }
            }

            hr { class: "separator" }

            div { class: "page-home__body",
                div { class: "page-home__bio",
                    for (index, paragraph) in home.bio.iter().enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                }

                aside { class: "page-home__aside",
                    div { class: "page-home__portrait",
                        img { src: "{home.images.profile}", alt: "{home.name}" }
                    }
                    if !social.is_empty() {
                        div { class: "social-links",
                            for link in social.into_iter() {
                                {render_social(link)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_social(link: SocialLink) -> Element {
    let class = format!("social-link {}", link.kind.css_class());
    let target = link.external.then_some("_blank");
    let rel = link.external.then_some("noopener noreferrer");
    let glyph = link.kind.glyph();

    rsx! {
        a {
            class: "{class}",
            href: "{link.href}",
            target,
            rel,
            title: link.title.clone(),
            aria_label: link.kind.label(),
            span { aria_hidden: "true", "{glyph}" }
        }
    }
}
