use dioxus::prelude::*;

use super::labels::PageLabels;
use super::view_model::{FacetChoice, FacetSet, FilterSelection, ALL};

/// Type and year selects plus the citations-only toggle. Each change swaps in
/// a new [`FilterSelection`] value.
#[component]
pub fn PublicationFilters(
    facets: FacetSet,
    labels: PageLabels,
    selection: Signal<FilterSelection>,
) -> Element {
    let current = selection();
    let mut selection = selection;

    let on_kind = move |evt: FormEvent| {
        let next = selection().with_kind(FacetChoice::from_value(&evt.value()));
        selection.set(next);
    };
    let on_year = move |evt: FormEvent| {
        let next = selection().with_year(FacetChoice::from_value(&evt.value()));
        selection.set(next);
    };
    let on_citations = move |evt: FormEvent| {
        let next = selection().with_citations_only(evt.checked());
        selection.set(next);
    };
    let on_reset = move |_| selection.set(FilterSelection::default());

    let kind_value = current.kind.as_value().to_string();
    let year_value = current.year.as_value().to_string();

    rsx! {
        form { class: "pub-filters", onsubmit: move |evt: FormEvent| evt.prevent_default(),
            label { class: "pub-filters__field",
                span { class: "pub-filters__label", "{labels.type_filter}" }
                select {
                    class: "pub-filters__select",
                    value: "{kind_value}",
                    oninput: on_kind,
                    option { value: ALL, selected: current.kind == FacetChoice::All, "{labels.all_types}" }
                    for kind in facets.kinds.iter() {
                        option {
                            key: "{kind}",
                            value: "{kind}",
                            selected: kind_value == *kind,
                            "{kind}"
                        }
                    }
                }
            }

            label { class: "pub-filters__field",
                span { class: "pub-filters__label", "{labels.year_filter}" }
                select {
                    class: "pub-filters__select",
                    value: "{year_value}",
                    oninput: on_year,
                    option { value: ALL, selected: current.year == FacetChoice::All, "{labels.all_years}" }
                    for year in facets.years.iter() {
                        option {
                            key: "{year}",
                            value: "{year}",
                            selected: year_value == *year,
                            "{year}"
                        }
                    }
                }
            }

            label { class: "pub-filters__toggle",
                input {
                    r#type: "checkbox",
                    checked: current.citations_only,
                    onchange: on_citations,
                }
                span { "{labels.citations_only}" }
            }

            if !current.is_default() {
                button {
                    r#type: "button",
                    class: "button button--ghost pub-filters__reset",
                    onclick: on_reset,
                    {crate::t!("pubs-filter-reset")}
                }
            }
        }
    }
}
