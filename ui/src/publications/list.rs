use dioxus::prelude::*;

use crate::content::PublicationRecord;
use crate::core::format::join_present;
use crate::core::links::LinkTarget;
use crate::t;

use super::view_model::PublicationView;

#[component]
pub fn PublicationList(view: PublicationView, total: usize, no_results: String) -> Element {
    let matched = view.matched;

    rsx! {
        section { class: "pub-list",
            div { class: "pub-list__header",
                span { class: "pub-list__meta",
                    {t!("pubs-showing", shown = matched, total = total)}
                }
            }

            if view.is_empty() {
                p { class: "pub-list__placeholder", "{no_results}" }
            } else {
                for group in view.groups.into_iter() {
                    div { key: "{group.year}", class: "pub-list__year",
                        h2 { class: "pub-list__year-heading", "{group.year}" }
                        ul { class: "pub-list__items",
                            for (index, record) in group.publications.into_iter().enumerate() {
                                {render_entry(index, record)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_entry(index: usize, record: PublicationRecord) -> Element {
    let link = LinkTarget::resolve(record.url.as_deref());
    let venue = venue_line(&record);
    let kind = record.kind_or_default().to_string();
    let citations = record
        .citations
        .filter(|count| *count > 0)
        .map(|count| t!("pubs-citation-count", count = count));

    rsx! {
        li { class: "pub-card", "data-index": "{index}",
            h3 { class: "pub-card__title",
                a {
                    href: "{link.href}",
                    target: link.target(),
                    rel: link.rel(),
                    "{record.title}"
                }
            }
            if let Some(authors) = record.authors.as_ref() {
                p { class: "pub-card__authors", "{authors}" }
            }
            if let Some(venue) = venue {
                p { class: "pub-card__venue", "{venue}" }
            }
            if let Some(location) = record.location.as_ref() {
                p { class: "pub-card__location", "{location}" }
            }
            div { class: "pub-card__badges",
                span { class: "badge badge--outline", "{kind}" }
                if let Some(citations) = citations {
                    span { class: "badge badge--secondary pub-card__citations", "{citations}" }
                }
            }
        }
    }
}

/// "venue, year" with whichever parts exist.
pub(crate) fn venue_line(record: &PublicationRecord) -> Option<String> {
    join_present([record.venue.as_deref(), record.year.as_deref()], ", ")
}
