//! Publications listing: the pure view model plus the components that render it.

pub mod chart;
pub mod view_model;

mod filters;
pub use filters::PublicationFilters;

mod labels;
pub use labels::PageLabels;

mod list;
pub use list::PublicationList;

mod stats;
pub use stats::PublicationStats;

pub use view_model::{
    compute_stats, distinct_facets, filter, group_by_year, sort_by_year_descending,
    AggregateStats, FacetChoice, FacetSet, FilterSelection, PublicationIndex, PublicationView,
    YearGroup,
};
