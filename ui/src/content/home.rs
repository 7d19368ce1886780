//! Home page bio and social profile links.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub greeting: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub title: String,
    pub at_label: String,
    pub institution: String,
    #[serde(default)]
    pub bio: Vec<String>,
    pub images: HomeImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeImages {
    pub profile: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub google_scholar: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub orcid: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Email,
    LinkedIn,
    GoogleScholar,
    GitHub,
    Twitter,
    Orcid,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::Email => "Email",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::GoogleScholar => "Google Scholar",
            SocialKind::GitHub => "GitHub",
            SocialKind::Twitter => "Twitter",
            SocialKind::Orcid => "ORCID",
        }
    }

    /// CSS modifier, e.g. `social-link--scholar`.
    pub fn css_class(self) -> &'static str {
        match self {
            SocialKind::Email => "social-link--email",
            SocialKind::LinkedIn => "social-link--linkedin",
            SocialKind::GoogleScholar => "social-link--scholar",
            SocialKind::GitHub => "social-link--github",
            SocialKind::Twitter => "social-link--twitter",
            SocialKind::Orcid => "social-link--orcid",
        }
    }

    /// Single-glyph mark shown inside the round badge.
    pub fn glyph(self) -> &'static str {
        match self {
            SocialKind::Email => "@",
            SocialKind::LinkedIn => "in",
            SocialKind::GoogleScholar => "GS",
            SocialKind::GitHub => "GH",
            SocialKind::Twitter => "X",
            SocialKind::Orcid => "iD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    /// Hover text; only email exposes the raw address.
    pub title: Option<String>,
    pub external: bool,
}

impl Social {
    /// Present links in display order. Email becomes a `mailto:` link and
    /// stays in the current tab; every profile opens in a new one.
    pub fn links(&self) -> Vec<SocialLink> {
        let mut links = Vec::new();

        if let Some(email) = non_empty(&self.email) {
            links.push(SocialLink {
                kind: SocialKind::Email,
                href: format!("mailto:{email}"),
                title: Some(email.to_string()),
                external: false,
            });
        }

        let profiles = [
            (SocialKind::LinkedIn, &self.linkedin),
            (SocialKind::GoogleScholar, &self.google_scholar),
            (SocialKind::GitHub, &self.github),
            (SocialKind::Twitter, &self.twitter),
            (SocialKind::Orcid, &self.orcid),
        ];
        for (kind, url) in profiles {
            if let Some(url) = non_empty(url) {
                links.push(SocialLink {
                    kind,
                    href: url.to_string(),
                    title: None,
                    external: true,
                });
            }
        }

        links
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
