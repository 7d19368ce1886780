//! Site-wide configuration: document metadata, footer and default language.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub footer: String,
    /// Preferred locale when the browser/OS requests none we ship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}
