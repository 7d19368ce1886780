//! Checks the content documents shipped in `ui/content/` against the loaders
//! and the publication view model they feed.

use ui::content::{SiteContent, UNKNOWN_YEAR};
use ui::publications::{FacetChoice, FilterSelection, PublicationIndex};

fn embedded() -> SiteContent {
    SiteContent::embedded().expect("embedded content must load")
}

#[test]
fn shipped_documents_load() {
    let content = embedded();
    assert!(!content.site.title.is_empty());
    assert!(!content.publications.publications.is_empty());
    assert!(!content.projects.is_empty());
    assert!(!content.navigation.links.is_empty());
    assert_eq!(content.site.default_language.as_deref(), Some("en-US"));
}

#[test]
fn navigation_covers_every_page() {
    let content = embedded();
    for route in ["/", "/publications", "/research/projects", "/art"] {
        assert!(
            content.navigation.links.iter().any(|l| l.url == route),
            "navigation.json has no link to {route}"
        );
    }
}

#[test]
fn default_view_shows_every_record_once() {
    let content = embedded();
    let index = PublicationIndex::new(content.publications.publications.clone());
    let view = index.view(&FilterSelection::default());

    let grouped: usize = view.groups.iter().map(|g| g.publications.len()).sum();
    assert_eq!(view.matched, index.records().len());
    assert_eq!(grouped, view.matched);
    assert_eq!(index.stats().total_publications, index.records().len());
}

#[test]
fn every_year_facet_has_a_group_in_the_default_view() {
    let content = embedded();
    let index = PublicationIndex::new(content.publications.publications.clone());
    let view = index.view(&FilterSelection::default());

    let group_years: Vec<&str> = view.groups.iter().map(|g| g.year.as_str()).collect();
    let facet_years: Vec<&str> = index.facets().years.iter().map(String::as_str).collect();
    assert_eq!(group_years, facet_years);
    assert!(facet_years.contains(&UNKNOWN_YEAR));
}

#[test]
fn stats_ignore_the_selection() {
    let content = embedded();
    let index = PublicationIndex::new(content.publications.publications.clone());
    let before = index.stats().clone();

    let narrowed = FilterSelection::default()
        .with_kind(FacetChoice::Only("presentation".into()))
        .with_citations_only(true);
    let view = index.view(&narrowed);

    assert!(view.is_empty());
    assert_eq!(index.stats(), &before);
}

#[test]
fn shipped_publication_stats() {
    let content = embedded();
    let index = PublicationIndex::new(content.publications.publications.clone());
    let stats = index.stats();

    assert_eq!(stats.total_publications, 5);
    assert_eq!(stats.total_citations, 7);
    assert_eq!(stats.average_citations, 1.4);
    assert_eq!(stats.pubs_by_type.get("article"), Some(&3));
    assert_eq!(stats.citations_by_year.get("2023"), Some(&5));
    assert_eq!(stats.pubs_by_year.get(UNKNOWN_YEAR), Some(&1));
}

#[test]
fn art_gallery_includes_an_empty_category() {
    let content = embedded();
    assert!(content.art.categories.iter().any(|c| c.images.is_empty()));
    assert!(content.art.category("Watercolor").is_some());
}
