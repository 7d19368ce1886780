//! Site navigation links.

use serde::{Deserialize, Serialize};

use super::ContentError;
use crate::core::links::is_external;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Navigation {
    #[serde(default)]
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
}

impl NavLink {
    /// The root link is active only on `/`; others match any path under them.
    pub fn is_active(&self, pathname: &str) -> bool {
        if self.url == "/" {
            pathname == "/"
        } else {
            pathname.starts_with(&self.url)
        }
    }

    pub fn is_external(&self) -> bool {
        is_external(&self.url)
    }
}

impl Navigation {
    pub(crate) fn validate(&self) -> Result<(), ContentError> {
        match self.links.iter().find(|link| link.url.trim().is_empty()) {
            Some(link) => Err(ContentError::invalid(
                "navigation",
                format!("link \"{}\" has an empty url", link.title),
            )),
            None => Ok(()),
        }
    }
}
