use crate::application::repositories::PageRepository;
use crate::domain::aggregates::Page;
use crate::domain::base::{DomainError, Entity};
use crate::domain::value_objects::PageId;
use crate::domain::DomainResult;
use std::collections::HashMap;

/// Process-lifetime page store backed by a `HashMap`
#[derive(Debug, Clone)]
pub struct InMemoryPageRepository {
    pages: HashMap<PageId, Page>,
    /// Next id to hand out; `None` once the id space is used up
    next_id: Option<u64>,
}

impl InMemoryPageRepository {
    /// Create an empty repository; the first page gets id "1"
    pub fn new() -> Self {
        InMemoryPageRepository {
            pages: HashMap::new(),
            next_id: Some(1),
        }
    }

    /// Create a repository holding `pages`.
    ///
    /// New ids continue after the highest seeded id and never go back, even
    /// when that page is later deleted.
    pub fn with_seed(pages: impl IntoIterator<Item = Page>) -> Self {
        let mut repo = Self::new();
        for page in pages {
            if repo.pages.contains_key(page.id()) {
                tracing::warn!("Duplicate seed page {}, keeping the last one", page.id());
            }
            repo.reserve(page.id());
            repo.pages.insert(page.id().clone(), page);
        }
        repo
    }

    /// Make sure `id` is never allocated again
    fn reserve(&mut self, id: &PageId) {
        if let Some(next) = self.next_id {
            if id.number() >= next {
                self.next_id = id.number().checked_add(1);
            }
        }
    }

    fn allocate_id(&mut self) -> DomainResult<PageId> {
        let next = self.next_id.ok_or_else(|| {
            DomainError::InvalidOperation("Page id space exhausted".to_string())
        })?;
        self.next_id = next.checked_add(1);
        Ok(PageId::from_number(next))
    }

    fn not_found(id: &PageId) -> DomainError {
        DomainError::NotFound(format!("Page {} not found", id))
    }
}

impl Default for InMemoryPageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRepository for InMemoryPageRepository {
    fn list(&self) -> DomainResult<Vec<Page>> {
        let mut pages: Vec<Page> = self.pages.values().cloned().collect();
        pages.sort_by(|a, b| {
            a.id()
                .number()
                .cmp(&b.id().number())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(pages)
    }

    fn get(&self, id: &PageId) -> DomainResult<Page> {
        self.pages
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    fn insert(&mut self, title: String, body: String) -> DomainResult<Page> {
        let id = self.allocate_id()?;
        let page = Page::new(id.clone(), title, body);
        self.pages.insert(id, page.clone());
        Ok(page)
    }

    fn update(&mut self, id: &PageId, title: String, body: String) -> DomainResult<Page> {
        let page = self.pages.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        page.revise(title, body);
        Ok(page.clone())
    }

    fn delete(&mut self, id: &PageId) -> DomainResult<()> {
        self.pages
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    fn len(&self) -> usize {
        self.pages.len()
    }
}
