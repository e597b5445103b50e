/// URL generation for the wiki's routes
use std::fmt::Display;

/// Computes redirect targets and links relative to a base URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteUrls {
    base: String,
}

impl RouteUrls {
    /// `base` is an absolute URL prefix such as `http://localhost:6543`,
    /// or empty for host-relative paths.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        RouteUrls {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn wiki_view(&self) -> String {
        format!("{}/", self.base)
    }

    pub fn wikipage_add(&self) -> String {
        format!("{}/add", self.base)
    }

    pub fn wikipage_view(&self, id: impl Display) -> String {
        format!("{}/{}", self.base, id)
    }

    pub fn wikipage_edit(&self, id: impl Display) -> String {
        format!("{}/{}/edit", self.base, id)
    }

    pub fn wikipage_delete(&self, id: impl Display) -> String {
        format!("{}/{}/delete", self.base, id)
    }
}
