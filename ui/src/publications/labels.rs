use crate::content::PublicationLabels;
use crate::t;

/// Page strings with every slot filled: content labels win, Fluent fills the gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLabels {
    pub title: String,
    pub description: Option<String>,
    pub no_results: String,
    pub all_types: String,
    pub all_years: String,
    pub type_filter: String,
    pub year_filter: String,
    pub citations_only: String,
    pub total_publications: String,
    pub total_citations: String,
    pub average_citations: String,
    pub citations_by_year: String,
    pub publications_by_year: String,
    pub publications_by_type: String,
}

impl PageLabels {
    pub fn resolve(labels: &PublicationLabels) -> Self {
        fn pick(value: &Option<String>, fallback: impl FnOnce() -> String) -> String {
            match value.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => fallback(),
            }
        }

        Self {
            title: pick(&labels.title, || t!("pubs-title")),
            description: labels.description.clone().filter(|d| !d.trim().is_empty()),
            no_results: pick(&labels.no_results, || t!("pubs-no-results")),
            all_types: pick(&labels.all_types, || t!("pubs-all-types")),
            all_years: pick(&labels.all_years, || t!("pubs-all-years")),
            type_filter: pick(&labels.type_filter, || t!("pubs-filter-type")),
            year_filter: pick(&labels.year_filter, || t!("pubs-filter-year")),
            citations_only: pick(&labels.citations_only, || t!("pubs-citations-only")),
            total_publications: pick(&labels.total_publications, || t!("pubs-stat-total")),
            total_citations: pick(&labels.total_citations, || t!("pubs-stat-citations")),
            average_citations: pick(&labels.average_citations, || t!("pubs-stat-average")),
            citations_by_year: pick(&labels.citations_by_year, || {
                t!("pubs-chart-citations-by-year")
            }),
            publications_by_year: pick(&labels.publications_by_year, || {
                t!("pubs-chart-pubs-by-year")
            }),
            publications_by_type: pick(&labels.publications_by_type, || {
                t!("pubs-chart-pubs-by-type")
            }),
        }
    }
}
