/// Domain aggregates
use super::base::Entity;
use super::value_objects::PageId;

/// A wiki page: the stored unit of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    title: String,
    body: String,
}

impl Page {
    pub fn new(id: PageId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Page {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Get the page title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the page body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace title and body wholesale; the id never changes
    pub fn revise(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.title = title.into();
        self.body = body.into();
    }
}

impl Entity for Page {
    type Id = PageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
