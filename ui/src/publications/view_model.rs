//! Publication view model: facets, filtering, ordering, grouping and statistics.
//!
//! Everything here is pure. The page holds a [`FilterSelection`] value in a
//! signal and re-runs [`PublicationIndex::view`] whenever it changes; facets
//! and statistics are computed once per record set and never depend on the
//! selection.
//!
//! Facets, grouping and statistics use the defaulted fields
//! (`"Unknown"` year, `"article"` type) while the type/year predicates compare
//! the raw, possibly-absent fields. A record without a `type` is therefore
//! counted under `"article"` but never matches an explicit `"article"`
//! selection. That asymmetry is intentional and covered by tests.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::PublicationRecord;

/// `<select>` value meaning "no restriction on this facet".
pub const ALL: &str = "all";

/// A single facet's selected value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FacetChoice {
    #[default]
    All,
    Only(String),
}

impl FacetChoice {
    /// Parses a `<select>` value; `"all"` means no restriction.
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }

    /// Compares against the raw field, so `None` only matches `All`.
    fn admits(&self, raw: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => raw == Some(value.as_str()),
        }
    }
}

impl fmt::Display for FacetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// The viewer's current facet filters. Replaced wholesale on every change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterSelection {
    pub kind: FacetChoice,
    pub year: FacetChoice,
    pub citations_only: bool,
}

impl FilterSelection {
    pub fn with_kind(self, kind: FacetChoice) -> Self {
        Self { kind, ..self }
    }

    pub fn with_year(self, year: FacetChoice) -> Self {
        Self { year, ..self }
    }

    pub fn with_citations_only(self, citations_only: bool) -> Self {
        Self {
            citations_only,
            ..self
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches_kind(&self, record: &PublicationRecord) -> bool {
        self.kind.admits(record.kind.as_deref())
    }

    pub fn matches_year(&self, record: &PublicationRecord) -> bool {
        self.year.admits(record.year.as_deref())
    }

    pub fn matches_citations(&self, record: &PublicationRecord) -> bool {
        !self.citations_only || record.has_citations()
    }

    pub fn admits(&self, record: &PublicationRecord) -> bool {
        self.matches_kind(record) && self.matches_year(record) && self.matches_citations(record)
    }
}

/// Distinct facet values in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetSet {
    /// Descending by string comparison, `"Unknown"` included.
    pub years: Vec<String>,
    /// First-seen order.
    pub kinds: Vec<String>,
}

/// Summary figures over the full, unfiltered record set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_publications: usize,
    pub total_citations: u64,
    /// Rounded to one decimal; zero for an empty set.
    pub average_citations: f64,
    pub citations_by_year: BTreeMap<String, u64>,
    pub pubs_by_year: BTreeMap<String, u64>,
    pub pubs_by_type: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    pub year: String,
    pub publications: Vec<PublicationRecord>,
}

/// Filtered, ordered and grouped records ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublicationView {
    pub groups: Vec<YearGroup>,
    pub matched: usize,
}

impl PublicationView {
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

pub fn distinct_facets(records: &[PublicationRecord]) -> FacetSet {
    let mut years: Vec<String> = records
        .iter()
        .map(|record| record.year_or_unknown())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    years.sort_by(|a, b| b.cmp(a));

    let mut seen = HashSet::new();
    let kinds = records
        .iter()
        .map(|record| record.kind_or_default())
        .filter(|kind| seen.insert(*kind))
        .map(str::to_string)
        .collect();

    FacetSet { years, kinds }
}

/// Records passing the type, year and citation predicates, in input order.
pub fn filter(records: &[PublicationRecord], selection: &FilterSelection) -> Vec<PublicationRecord> {
    records
        .iter()
        .filter(|record| selection.admits(record))
        .cloned()
        .collect()
}

/// Stable sort on the raw year (empty when missing), newest first.
pub fn sort_by_year_descending(mut records: Vec<PublicationRecord>) -> Vec<PublicationRecord> {
    records.sort_by(|a, b| {
        let a_year = a.year.as_deref().unwrap_or("");
        let b_year = b.year.as_deref().unwrap_or("");
        b_year.cmp(a_year)
    });
    records
}

/// Partitions by defaulted year; groups ordered by key descending.
pub fn group_by_year(records: Vec<PublicationRecord>) -> Vec<YearGroup> {
    let mut groups: BTreeMap<String, Vec<PublicationRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.year_or_unknown().to_string())
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .rev()
        .map(|(year, publications)| YearGroup { year, publications })
        .collect()
}

pub fn compute_stats(records: &[PublicationRecord]) -> AggregateStats {
    let mut stats = AggregateStats {
        total_publications: records.len(),
        ..AggregateStats::default()
    };

    for record in records {
        let citations = u64::from(record.citation_count());
        let year = record.year_or_unknown().to_string();

        stats.total_citations += citations;
        *stats.citations_by_year.entry(year.clone()).or_default() += citations;
        *stats.pubs_by_year.entry(year).or_default() += 1;
        *stats
            .pubs_by_type
            .entry(record.kind_or_default().to_string())
            .or_default() += 1;
    }

    stats.average_citations = average_one_decimal(stats.total_citations, stats.total_publications);
    stats
}

fn average_one_decimal(total: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let raw = total as f64 / count as f64;
    (raw * 10.0).round() / 10.0
}

/// A loaded record set with its selection-independent derivations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublicationIndex {
    records: Vec<PublicationRecord>,
    facets: FacetSet,
    stats: AggregateStats,
}

impl PublicationIndex {
    pub fn new(records: Vec<PublicationRecord>) -> Self {
        let facets = distinct_facets(&records);
        let stats = compute_stats(&records);
        Self {
            records,
            facets,
            stats,
        }
    }

    pub fn records(&self) -> &[PublicationRecord] {
        &self.records
    }

    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// Filter, then sort, then group, recomputed in full for `selection`.
    pub fn view(&self, selection: &FilterSelection) -> PublicationView {
        let filtered = filter(&self.records, selection);
        let matched = filtered.len();
        let groups = group_by_year(sort_by_year_descending(filtered));
        PublicationView { groups, matched }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, year: Option<&str>, kind: Option<&str>, citations: Option<u32>) -> PublicationRecord {
        PublicationRecord {
            year: year.map(str::to_string),
            kind: kind.map(str::to_string),
            citations,
            ..PublicationRecord::new(title)
        }
    }

    /// Three records: two from 2023 (one without citation data) and one from 2021.
    fn sample() -> Vec<PublicationRecord> {
        vec![
            record("a", Some("2023"), Some("article"), Some(5)),
            record("b", Some("2023"), Some("presentation"), None),
            record("c", Some("2021"), Some("article"), Some(2)),
        ]
    }

    fn titles(records: &[PublicationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    fn selection(kind: &str, year: &str, citations_only: bool) -> FilterSelection {
        FilterSelection {
            kind: FacetChoice::from_value(kind),
            year: FacetChoice::from_value(year),
            citations_only,
        }
    }

    #[test]
    fn facets_sort_years_descending_and_keep_type_order() {
        let facets = distinct_facets(&sample());
        assert_eq!(facets.years, vec!["2023", "2021"]);
        assert_eq!(facets.kinds, vec!["article", "presentation"]);
    }

    #[test]
    fn facets_include_defaulted_values() {
        let records = vec![
            record("x", None, Some("poster"), None),
            record("y", Some("2019"), None, None),
        ];
        let facets = distinct_facets(&records);
        assert_eq!(facets.years, vec!["Unknown", "2019"]);
        assert_eq!(facets.kinds, vec!["poster", "article"]);
    }

    #[test]
    fn facets_of_empty_input_are_empty() {
        assert_eq!(distinct_facets(&[]), FacetSet::default());
    }

    #[test]
    fn stats_for_sample() {
        let stats = compute_stats(&sample());
        assert_eq!(stats.total_publications, 3);
        assert_eq!(stats.total_citations, 7);
        assert_eq!(stats.average_citations, 2.3);
        assert_eq!(
            stats.pubs_by_year,
            BTreeMap::from([("2023".to_string(), 2), ("2021".to_string(), 1)])
        );
        assert_eq!(
            stats.pubs_by_type,
            BTreeMap::from([("article".to_string(), 2), ("presentation".to_string(), 1)])
        );
        assert_eq!(
            stats.citations_by_year,
            BTreeMap::from([("2023".to_string(), 5), ("2021".to_string(), 2)])
        );
    }

    #[test]
    fn stats_of_empty_input_are_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, AggregateStats::default());
        assert_eq!(stats.average_citations, 0.0);
    }

    #[test]
    fn stats_key_missing_fields_by_default_values() {
        let stats = compute_stats(&[record("x", None, None, Some(4))]);
        assert_eq!(stats.citations_by_year.get("Unknown"), Some(&4));
        assert_eq!(stats.pubs_by_year.get("Unknown"), Some(&1));
        assert_eq!(stats.pubs_by_type.get("article"), Some(&1));
    }

    #[test]
    fn type_filter_keeps_original_order() {
        let out = filter(&sample(), &selection("article", "all", false));
        assert_eq!(titles(&out), vec!["a", "c"]);
    }

    #[test]
    fn citations_only_excludes_missing_and_zero() {
        let mut records = sample();
        records.push(record("d", Some("2020"), None, Some(0)));
        let out = filter(&records, &selection("all", "all", true));
        assert_eq!(titles(&out), vec!["a", "c"]);
    }

    #[test]
    fn year_filter_compares_raw_year() {
        let records = vec![
            record("dated", Some("2022"), None, None),
            record("undated", None, None, None),
        ];
        assert_eq!(
            titles(&filter(&records, &selection("all", "2022", false))),
            vec!["dated"]
        );
        // "Unknown" is a facet value but the raw field is absent.
        assert!(filter(&records, &selection("all", "Unknown", false)).is_empty());
    }

    #[test]
    fn untyped_record_is_counted_as_article_but_not_matched_by_it() {
        let records = vec![record("untyped", Some("2022"), None, Some(1))];
        assert_eq!(distinct_facets(&records).kinds, vec!["article"]);
        assert_eq!(compute_stats(&records).pubs_by_type.get("article"), Some(&1));
        assert!(filter(&records, &selection("article", "all", false)).is_empty());
        assert_eq!(filter(&records, &FilterSelection::default()).len(), 1);
    }

    #[test]
    fn filter_is_the_conjunction_of_the_three_predicates() {
        let mut records = sample();
        records.push(record("d", None, None, Some(3)));
        records.push(record("e", Some("2021"), Some("presentation"), Some(0)));

        let kinds = ["all", "article", "presentation"];
        let years = ["all", "2023", "2021", "Unknown"];
        for kind in kinds {
            for year in years {
                for citations_only in [false, true] {
                    let sel = selection(kind, year, citations_only);
                    let out = filter(&records, &sel);
                    for r in &records {
                        let expected = (kind == "all" || r.kind.as_deref() == Some(kind))
                            && (year == "all" || r.year.as_deref() == Some(year))
                            && (!citations_only || r.citations.is_some_and(|c| c > 0));
                        assert_eq!(out.contains(r), expected, "{sel:?} / {}", r.title);
                    }
                }
            }
        }
    }

    #[test]
    fn sort_is_stable_within_a_year() {
        let mut records = sample();
        records.reverse();
        let sorted = sort_by_year_descending(records);
        assert_eq!(titles(&sorted), vec!["b", "a", "c"]);

        let sorted = sort_by_year_descending(sample());
        assert_eq!(titles(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_puts_missing_years_last() {
        let records = vec![
            record("undated", None, None, None),
            record("old", Some("1999"), None, None),
        ];
        assert_eq!(titles(&sort_by_year_descending(records)), vec!["old", "undated"]);
    }

    #[test]
    fn groups_are_descending_and_preserve_order() {
        let groups = group_by_year(sort_by_year_descending(sample()));
        let keys: Vec<&str> = groups.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(keys, vec!["2023", "2021"]);
        assert_eq!(titles(&groups[0].publications), vec!["a", "b"]);
    }

    #[test]
    fn grouping_is_complete() {
        let mut records = sample();
        records.push(record("d", None, None, None));
        records.push(record("e", Some("2021"), None, None));
        let total = records.len();
        let groups = group_by_year(records);
        assert_eq!(
            groups.iter().map(|g| g.publications.len()).sum::<usize>(),
            total
        );
        assert_eq!(groups[0].year, "Unknown");
    }

    #[test]
    fn view_pipeline_is_idempotent() {
        let index = PublicationIndex::new(sample());
        let sel = selection("all", "2023", false);
        let first = index.view(&sel);
        let second = index.view(&sel);
        assert_eq!(first, second);
        assert_eq!(first.matched, 2);
    }

    #[test]
    fn stats_do_not_depend_on_selection() {
        let index = PublicationIndex::new(sample());
        let before = index.stats().clone();
        let narrowed = index.view(&selection("presentation", "2023", true));
        assert!(narrowed.is_empty());
        assert_eq!(index.stats(), &before);
        assert_eq!(index.stats(), &compute_stats(index.records()));
    }

    #[test]
    fn facet_choice_round_trips_select_values() {
        assert_eq!(FacetChoice::from_value("all"), FacetChoice::All);
        assert_eq!(
            FacetChoice::from_value("2021"),
            FacetChoice::Only("2021".into())
        );
        assert_eq!(FacetChoice::Only("poster".into()).to_string(), "poster");
        assert_eq!(FacetChoice::All.as_value(), "all");
    }

    #[test]
    fn selection_builders_replace_one_field() {
        let sel = FilterSelection::default()
            .with_kind(FacetChoice::from_value("article"))
            .with_citations_only(true);
        assert_eq!(sel.kind, FacetChoice::Only("article".into()));
        assert_eq!(sel.year, FacetChoice::All);
        assert!(sel.citations_only);
        assert!(!sel.is_default());
        assert!(sel.with_kind(FacetChoice::All).with_citations_only(false).is_default());
    }
}
