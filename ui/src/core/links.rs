//! Link target resolution shared by publication, project and navigation links.

/// Resolved anchor attributes for a possibly-missing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub href: String,
    pub external: bool,
}

impl LinkTarget {
    /// Absent URLs point at `#`; anything starting with `http` opens in a new tab.
    pub fn resolve(url: Option<&str>) -> Self {
        match url {
            Some(url) if !url.is_empty() => Self {
                href: url.to_string(),
                external: is_external(url),
            },
            _ => Self {
                href: "#".to_string(),
                external: false,
            },
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

pub fn is_external(url: &str) -> bool {
    url.starts_with("http")
}
