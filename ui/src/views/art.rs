use dioxus::prelude::*;

use crate::components::ContentUnavailable;
use crate::content::{self, toggle_category, ArtCategory, ArtLabels};
use crate::core::format;

#[component]
pub fn Art() -> Element {
    let lang_marker = super::use_lang_marker();
    let mut selected = use_signal(|| Option::<String>::None);

    let site = match content::site() {
        Ok(site) => site,
        Err(err) => return rsx! { ContentUnavailable { reason: err.to_string() } },
    };
    let gallery = &site.art;
    let active = selected();
    let active_category = active.as_deref().and_then(|name| gallery.category(name));

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-art",
            header { class: "page__header",
                h1 { "{gallery.title}" }
                p { class: "page__lede", "{gallery.description}" }
            }

            hr { class: "separator" }

            div { class: "art-filters",
                h2 { class: "art-filters__heading", "{gallery.labels.categories}" }
                div { class: "art-filters__buttons",
                    for category in gallery.categories.iter() {
                        {
                            let name = category.name.clone();
                            let is_active = active.as_deref() == Some(category.name.as_str());
                            let count = category.images.len();
                            let class = if is_active { "art-filter art-filter--active" } else { "art-filter" };
                            rsx! {
                                button {
                                    r#type: "button",
                                    class,
                                    onclick: move |_| {
                                        let next = toggle_category(selected().as_deref(), &name);
                                        selected.set(next);
                                    },
                                    span { class: "art-filter__name", "{category.name}" }
                                    if count > 0 {
                                        span { class: "badge art-filter__count", "{count}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            hr { class: "separator" }

            match active_category {
                Some(category) if !category.images.is_empty() => render_gallery(category, &gallery.labels),
                Some(_) => rsx! {
                    div { class: "art-empty",
                        p { "{gallery.labels.no_images}" }
                    }
                },
                None => rsx! {
                    div { class: "art-empty",
                        p { "{gallery.labels.select_category}" }
                    }
                },
            }
        }
    }
}

fn render_gallery(category: &ArtCategory, labels: &ArtLabels) -> Element {
    let count = format::count_label(category.images.len(), &labels.image, &labels.images);

    rsx! {
        div { class: "art-gallery",
            div { class: "art-gallery__header",
                h2 { "{category.name}" }
                span { class: "badge badge--secondary", "{count}" }
            }
            div { class: "art-grid",
                for (index, image) in category.images.iter().enumerate() {
                    {
                        let alt = category.image_alt(index);
                        rsx! {
                            div { class: "art-grid__item",
                                img { src: "{image.src}", alt: "{alt}", "loading": "lazy" }
                                if let Some(caption) = image.alt.as_ref() {
                                    div { class: "art-grid__caption", "{caption}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
