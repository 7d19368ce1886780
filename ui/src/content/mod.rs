//! Typed content documents for every page.
//!
//! The JSON documents under `ui/content/` are embedded at compile time and
//! parsed once, on first access, into a process-wide [`SiteContent`]. They are
//! read-only afterwards. Malformed documents are rejected as a whole at load
//! time; pages then render a [`crate::components::ContentUnavailable`] notice
//! instead of partial data.

mod art;
mod home;
mod navigation;
mod projects;
mod publications;
mod site;

pub use art::{toggle_category, ArtCategory, ArtGallery, ArtImage, ArtLabels};
pub use home::{HomeContent, HomeImages, Social, SocialKind, SocialLink};
pub use navigation::{NavLink, Navigation};
pub use projects::{
    OutputKind, PageConfig, Project, ProjectImage, ProjectOutput, ProjectSections,
    ProjectsPageConfig,
};
pub use publications::{
    PublicationLabels, PublicationRecord, PublicationsDocument, DEFAULT_KIND, UNKNOWN_YEAR,
};
pub use site::SiteConfig;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("couldn't parse {document} content: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {document} content: {reason}")]
    Invalid {
        document: &'static str,
        reason: String,
    },
}

impl ContentError {
    pub(crate) fn invalid(document: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            document,
            reason: reason.into(),
        }
    }
}

/// Raw JSON for each content document.
#[derive(Debug, Clone, Copy)]
pub struct ContentSources<'a> {
    pub site: &'a str,
    pub home: &'a str,
    pub publications: &'a str,
    pub projects: &'a str,
    pub page_config: &'a str,
    pub art: &'a str,
    pub navigation: &'a str,
}

macro_rules! embedded_document {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/", $file))
    };
}

impl ContentSources<'static> {
    /// The documents shipped with the site.
    pub const EMBEDDED: Self = Self {
        site: embedded_document!("site.json"),
        home: embedded_document!("home.json"),
        publications: embedded_document!("publications.json"),
        projects: embedded_document!("projects.json"),
        page_config: embedded_document!("page-config.json"),
        art: embedded_document!("art.json"),
        navigation: embedded_document!("navigation.json"),
    };
}

/// Every parsed and validated content document.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub site: SiteConfig,
    pub home: HomeContent,
    pub publications: PublicationsDocument,
    pub projects: Vec<Project>,
    pub page_config: PageConfig,
    pub art: ArtGallery,
    pub navigation: Navigation,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_sources(&ContentSources::EMBEDDED)
    }

    pub fn from_sources(sources: &ContentSources<'_>) -> Result<Self, ContentError> {
        let content = Self {
            site: parse("site", sources.site)?,
            home: parse("home", sources.home)?,
            publications: parse("publications", sources.publications)?,
            projects: parse("projects", sources.projects)?,
            page_config: parse("page-config", sources.page_config)?,
            art: parse("art", sources.art)?,
            navigation: parse("navigation", sources.navigation)?,
        };

        content.publications.validate()?;
        projects::validate_projects(&content.projects)?;
        content.navigation.validate()?;

        Ok(content)
    }
}

fn parse<T: DeserializeOwned>(document: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { document, source })
}

static SITE: Lazy<Result<SiteContent, ContentError>> = Lazy::new(|| {
    let loaded = SiteContent::embedded();
    match &loaded {
        Ok(content) => info!(
            publications = content.publications.publications.len(),
            projects = content.projects.len(),
            art_categories = content.art.categories.len(),
            "site content loaded"
        ),
        Err(err) => error!("site content rejected: {err}"),
    }
    loaded
});

/// Shared, lazily parsed site content.
pub fn site() -> Result<&'static SiteContent, &'static ContentError> {
    SITE.as_ref()
}
