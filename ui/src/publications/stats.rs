use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::chart::BarChart;
use super::labels::PageLabels;
use super::view_model::AggregateStats;

/// Highlights and charts over the full record set; unaffected by filters.
#[component]
pub fn PublicationStats(stats: AggregateStats, labels: PageLabels) -> Element {
    let empty_label = t!("chart-empty");
    let average = format::format_average(stats.average_citations);

    rsx! {
        section { class: "pub-stats",
            div { class: "pub-highlights",
                div { class: "pub-highlight",
                    span { class: "pub-highlight__label", "{labels.total_publications}" }
                    strong { class: "pub-highlight__value", "{stats.total_publications}" }
                }
                div { class: "pub-highlight",
                    span { class: "pub-highlight__label", "{labels.total_citations}" }
                    strong { class: "pub-highlight__value", "{stats.total_citations}" }
                }
                div { class: "pub-highlight",
                    span { class: "pub-highlight__label", "{labels.average_citations}" }
                    strong { class: "pub-highlight__value", "{average}" }
                }
            }

            div { class: "pub-charts",
                BarChart {
                    title: labels.citations_by_year.clone(),
                    data: stats.citations_by_year.clone(),
                    empty_label: empty_label.clone(),
                }
                BarChart {
                    title: labels.publications_by_year.clone(),
                    data: stats.pubs_by_year.clone(),
                    empty_label: empty_label.clone(),
                }
                BarChart {
                    title: labels.publications_by_type.clone(),
                    data: stats.pubs_by_type.clone(),
                    empty_label,
                }
            }
        }
    }
}
