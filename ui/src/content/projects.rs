//! Research projects and their attached outputs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ContentError;
use crate::core::format::join_present;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default)]
    pub publications: Vec<ProjectOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ProjectImage {
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt.as_deref().unwrap_or(fallback)
    }
}

/// A paper, talk or plain link listed under a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOutput {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Link,
    Presentation,
    Article,
}

impl ProjectOutput {
    pub fn output_kind(&self) -> OutputKind {
        match self.kind.as_deref() {
            Some("link") => OutputKind::Link,
            Some("presentation") => OutputKind::Presentation,
            _ => OutputKind::Article,
        }
    }

    /// "location · year", with the separator only when both are present.
    pub fn place_and_year(&self) -> Option<String> {
        join_present([self.location.as_deref(), self.year.as_deref()], " · ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSections {
    pub presentations_articles: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectsPageConfig {
    pub title: String,
    #[serde(default)]
    pub sections: ProjectSections,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageConfig {
    pub projects: ProjectsPageConfig,
}

pub(crate) fn validate_projects(projects: &[Project]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for project in projects {
        if project.id.trim().is_empty() {
            return Err(ContentError::invalid(
                "projects",
                format!("project \"{}\" has an empty id", project.title),
            ));
        }
        if !seen.insert(project.id.as_str()) {
            return Err(ContentError::invalid(
                "projects",
                format!("duplicate project id \"{}\"", project.id),
            ));
        }
    }
    Ok(())
}
