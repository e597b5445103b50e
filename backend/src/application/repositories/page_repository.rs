use crate::domain::{aggregates::Page, value_objects::PageId, DomainResult};

/// Repository trait for the wiki's page store.
///
/// The store maps page identifiers to page records. Implementations own
/// identifier allocation, so callers never pick ids for new pages.
pub trait PageRepository {
    /// Returns all pages in the repository.
    ///
    /// Callers must not rely on any particular order.
    fn list(&self) -> DomainResult<Vec<Page>>;

    /// Finds a page by its unique identifier.
    ///
    /// Fails with `DomainError::NotFound` when the id is absent.
    fn get(&self, id: &PageId) -> DomainResult<Page>;

    /// Stores a new page under a freshly allocated identifier and returns it.
    fn insert(&mut self, title: String, body: String) -> DomainResult<Page>;

    /// Replaces the title and body of an existing page.
    ///
    /// Fails with `DomainError::NotFound` when the id is absent.
    fn update(&mut self, id: &PageId, title: String, body: String) -> DomainResult<Page>;

    /// Removes a page.
    ///
    /// Fails with `DomainError::NotFound` when the id is absent.
    fn delete(&mut self, id: &PageId) -> DomainResult<()>;

    /// Number of stored pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
