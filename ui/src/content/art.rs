//! Image gallery grouped into named categories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtGallery {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub labels: ArtLabels,
    #[serde(default)]
    pub categories: Vec<ArtCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtLabels {
    pub categories: String,
    pub image: String,
    pub images: String,
    pub no_images: String,
    pub select_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtCategory {
    pub name: String,
    #[serde(default)]
    pub images: Vec<ArtImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ArtGallery {
    pub fn category(&self, name: &str) -> Option<&ArtCategory> {
        self.categories.iter().find(|category| category.name == name)
    }
}

impl ArtCategory {
    /// Alt text for the image at `index`, numbering from one when the image has none.
    pub fn image_alt(&self, index: usize) -> String {
        match self.images.get(index).and_then(|img| img.alt.as_deref()) {
            Some(alt) => alt.to_string(),
            None => format!("{} image {}", self.name, index + 1),
        }
    }
}

/// Clicking the active category clears the selection; any other click selects it.
pub fn toggle_category(current: Option<&str>, clicked: &str) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}
