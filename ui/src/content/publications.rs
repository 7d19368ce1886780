//! Publication records and the page labels that travel with them.

use serde::{Deserialize, Serialize};

use super::ContentError;

/// Year category used when a record carries no `year`.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Type tag used when a record carries no `type`.
pub const DEFAULT_KIND: &str = "article";

/// A single publication entry. Optional fields stay optional: an absent
/// `citations` means "no citation data", which is not the same as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PublicationRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl PublicationRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Year used for grouping, facets and statistics.
    pub fn year_or_unknown(&self) -> &str {
        self.year.as_deref().unwrap_or(UNKNOWN_YEAR)
    }

    /// Type used for grouping, facets and statistics.
    pub fn kind_or_default(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_KIND)
    }

    pub fn citation_count(&self) -> u32 {
        self.citations.unwrap_or(0)
    }

    /// True only when citation data exists and is non-zero.
    pub fn has_citations(&self) -> bool {
        matches!(self.citations, Some(count) if count > 0)
    }
}

/// UI strings shipped alongside the records. Missing entries fall back to
/// the localized defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationLabels {
    pub title: Option<String>,
    pub description: Option<String>,
    pub no_results: Option<String>,
    pub all_types: Option<String>,
    pub all_years: Option<String>,
    pub type_filter: Option<String>,
    pub year_filter: Option<String>,
    pub citations_only: Option<String>,
    pub total_publications: Option<String>,
    pub total_citations: Option<String>,
    pub average_citations: Option<String>,
    pub citations_by_year: Option<String>,
    pub publications_by_year: Option<String>,
    pub publications_by_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PublicationsDocument {
    #[serde(default)]
    pub publications: Vec<PublicationRecord>,
    #[serde(default)]
    pub labels: PublicationLabels,
}

impl PublicationsDocument {
    pub(crate) fn validate(&self) -> Result<(), ContentError> {
        if let Some(index) = self
            .publications
            .iter()
            .position(|record| record.title.trim().is_empty())
        {
            return Err(ContentError::invalid(
                "publications",
                format!("publication #{index} has an empty title"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_only_to_derived_accessors() {
        let record: PublicationRecord = serde_json::from_str(r#"{"title":"Untagged"}"#).unwrap();
        assert_eq!(record.kind, None);
        assert_eq!(record.year, None);
        assert_eq!(record.kind_or_default(), "article");
        assert_eq!(record.year_or_unknown(), "Unknown");
        assert_eq!(record.citation_count(), 0);
        assert!(!record.has_citations());
    }

    #[test]
    fn zero_citations_are_kept_distinct_from_missing() {
        let record: PublicationRecord =
            serde_json::from_str(r#"{"title":"Zero","citations":0}"#).unwrap();
        assert_eq!(record.citations, Some(0));
        assert!(!record.has_citations());
    }

    #[test]
    fn type_field_maps_to_kind() {
        let record: PublicationRecord =
            serde_json::from_str(r#"{"title":"Talk","type":"presentation"}"#).unwrap();
        assert_eq!(record.kind.as_deref(), Some("presentation"));
    }

    #[test]
    fn negative_citations_do_not_parse() {
        let parsed = serde_json::from_str::<PublicationRecord>(r#"{"title":"Bad","citations":-1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_title_fails_validation() {
        let doc = PublicationsDocument {
            publications: vec![PublicationRecord::new("Fine"), PublicationRecord::new("  ")],
            labels: PublicationLabels::default(),
        };
        let err = doc.validate().unwrap_err();
        assert!(err.to_string().contains("publication #1"));
    }
}
