use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::components::ContentUnavailable;
use crate::content;
use crate::publications::{
    FilterSelection, PageLabels, PublicationFilters, PublicationIndex, PublicationList,
    PublicationStats,
};

#[component]
pub fn Publications() -> Element {
    let lang_marker = super::use_lang_marker();

    let site = match content::site() {
        Ok(site) => site,
        Err(err) => return rsx! { ContentUnavailable { reason: err.to_string() } },
    };

    // Facets and stats are derived once per record set; only the view follows the selection.
    let index = use_hook(|| Rc::new(PublicationIndex::new(site.publications.publications.clone())));
    let selection = use_signal(FilterSelection::default);

    let view = {
        let index = index.clone();
        use_memo(move || {
            let current = selection();
            let view = index.view(&current);
            debug!(?current, matched = view.matched, "publication view recomputed");
            view
        })
    };

    let labels = PageLabels::resolve(&site.publications.labels);
    let total = index.records().len();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-publications",
            header { class: "page__header",
                h1 { "{labels.title}" }
                if let Some(description) = labels.description.as_ref() {
                    p { class: "page__lede", "{description}" }
                }
            }

            PublicationStats { stats: index.stats().clone(), labels: labels.clone() }

            PublicationFilters {
                facets: index.facets().clone(),
                labels: labels.clone(),
                selection,
            }

            PublicationList {
                view: view(),
                total,
                no_results: labels.no_results.clone(),
            }
        }
    }
}
