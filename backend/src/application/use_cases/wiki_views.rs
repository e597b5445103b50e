use crate::application::dto::{PageView, Response, View};
use crate::application::forms::{Appstruct, Form, Validation};
use crate::application::repositories::PageRepository;
use crate::application::routes::RouteUrls;
use crate::domain::{aggregates::Page, base::Entity, value_objects::PageId, DomainError, DomainResult};
use tracing::{debug, info};

pub const LIST_TITLE: &str = "Welcome to the Wiki";
pub const ADD_TITLE: &str = "Add Wiki Page";

/// Result of a single controller operation.
///
/// Validation problems are not errors: they come back as a re-rendered form.
/// Only `DomainError::NotFound` (and store failures) surface as `Err`.
pub type ViewResult = DomainResult<Response>;

/// Page controller for the wiki.
///
/// Each method handles one request. State lives only in the repository, which
/// the caller owns and lends out for the duration of the request.
pub struct WikiViews<'a, R: PageRepository> {
    repository: &'a mut R,
    form: &'a Form,
    routes: &'a RouteUrls,
}

impl<'a, R: PageRepository> WikiViews<'a, R> {
    pub fn new(repository: &'a mut R, form: &'a Form, routes: &'a RouteUrls) -> Self {
        Self {
            repository,
            form,
            routes,
        }
    }

    /// All pages
    pub fn list(&self) -> ViewResult {
        let pages = self.repository.list()?;
        debug!("Listing {} pages", pages.len());

        Ok(Response::Render(View::WikiList {
            title: LIST_TITLE.to_string(),
            pages: pages.iter().map(PageView::from).collect(),
        }))
    }

    /// Add form: shown when nothing was submitted, processed otherwise
    pub fn add(&mut self, controls: &[(String, String)]) -> ViewResult {
        if controls.is_empty() {
            self.show_add_form()
        } else {
            self.submit_add(controls)
        }
    }

    pub fn show_add_form(&self) -> ViewResult {
        Ok(Response::Render(View::PageForm {
            title: ADD_TITLE.to_string(),
            page: None,
            form: self.form.render(None),
        }))
    }

    pub fn submit_add(&mut self, controls: &[(String, String)]) -> ViewResult {
        let appstruct = match self.form.validate(controls) {
            Validation::Valid(appstruct) => appstruct,
            Validation::Invalid(failure) => {
                debug!("Add form rejected: {:?}", failure.errors());
                return Ok(Response::Render(View::PageForm {
                    title: ADD_TITLE.to_string(),
                    page: None,
                    form: self.form.render_with_errors(&failure),
                }));
            }
        };

        let (title, body) = page_fields(&appstruct);
        let page = self.repository.insert(title, body)?;
        info!("Created page {} ({})", page.id(), page.title());

        Ok(Response::Redirect(self.routes.wikipage_view(page.id())))
    }

    /// A single page
    pub fn show(&self, id: &str) -> ViewResult {
        let page = self.find(id)?;

        Ok(Response::Render(View::PageDetail {
            title: page.title().to_string(),
            page: PageView::from(&page),
        }))
    }

    /// Edit form: shown when nothing was submitted, processed otherwise
    pub fn edit(&mut self, id: &str, controls: &[(String, String)]) -> ViewResult {
        if controls.is_empty() {
            self.show_edit_form(id)
        } else {
            self.submit_edit(id, controls)
        }
    }

    pub fn show_edit_form(&self, id: &str) -> ViewResult {
        let page = self.find(id)?;
        let initial = Appstruct::new(vec![
            ("title".to_string(), page.title().to_string()),
            ("body".to_string(), page.body().to_string()),
        ]);

        Ok(Response::Render(View::PageForm {
            title: edit_title(&page),
            form: self.form.render(Some(&initial)),
            page: Some(PageView::from(&page)),
        }))
    }

    pub fn submit_edit(&mut self, id: &str, controls: &[(String, String)]) -> ViewResult {
        let page = self.find(id)?;

        let appstruct = match self.form.validate(controls) {
            Validation::Valid(appstruct) => appstruct,
            Validation::Invalid(failure) => {
                debug!("Edit form for page {} rejected: {:?}", page.id(), failure.errors());
                return Ok(Response::Render(View::PageForm {
                    title: edit_title(&page),
                    form: self.form.render_with_errors(&failure),
                    page: Some(PageView::from(&page)),
                }));
            }
        };

        let (title, body) = page_fields(&appstruct);
        let page = self.repository.update(page.id(), title, body)?;
        info!("Updated page {}", page.id());

        Ok(Response::Redirect(self.routes.wikipage_view(page.id())))
    }

    pub fn delete(&mut self, id: &str) -> ViewResult {
        let page_id = parse_id(id)?;
        self.repository.delete(&page_id)?;
        info!("Deleted page {}", page_id);

        Ok(Response::Redirect(self.routes.wiki_view()))
    }

    fn find(&self, id: &str) -> DomainResult<Page> {
        self.repository.get(&parse_id(id)?)
    }
}

/// Route ids that are not valid page ids can never be stored, so they are simply not found
fn parse_id(raw: &str) -> DomainResult<PageId> {
    PageId::new(raw).map_err(|_| DomainError::NotFound(format!("Page {} not found", raw)))
}

fn edit_title(page: &Page) -> String {
    format!("Edit {}", page.title())
}

fn page_fields(appstruct: &Appstruct) -> (String, String) {
    (
        appstruct.get("title").unwrap_or_default().to_string(),
        appstruct.get("body").unwrap_or_default().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forms::Schema;
    use crate::infrastructure::persistence::InMemoryPageRepository;

    fn controls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn seeded() -> InMemoryPageRepository {
        InMemoryPageRepository::with_seed(vec![Page::new(
            PageId::new("1").unwrap(),
            "FrontPage",
            "Welcome",
        )])
    }

    #[test]
    fn test_list_returns_all_pages() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::default();
        let views = WikiViews::new(&mut repo, &form, &routes);

        match views.list().unwrap() {
            Response::Render(View::WikiList { title, pages }) => {
                assert_eq!(title, LIST_TITLE);
                assert_eq!(pages.len(), 1);
                assert_eq!(pages[0].title, "FrontPage");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_add_without_data_shows_empty_form() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::default();
        let mut views = WikiViews::new(&mut repo, &form, &routes);

        match views.add(&[]).unwrap() {
            Response::Render(View::PageForm { title, page, form }) => {
                assert_eq!(title, ADD_TITLE);
                assert!(page.is_none());
                assert!(form.contains("name=\"title\" value=\"\""));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_submit_add_redirects_to_new_page() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::default();
        let response = WikiViews::new(&mut repo, &form, &routes)
            .add(&controls(&[("title", "Second Page"), ("body", "Hello")]))
            .unwrap();

        assert_eq!(response, Response::Redirect("/2".to_string()));
        assert_eq!(repo.len(), 2);
        let page = repo.get(&PageId::new("2").unwrap()).unwrap();
        assert_eq!(page.title(), "Second Page");
        assert_eq!(page.body(), "Hello");
    }

    #[test]
    fn test_submit_add_invalid_rerenders_without_mutation() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::default();
        let response = WikiViews::new(&mut repo, &form, &routes)
            .submit_add(&controls(&[("title", "Orphan"), ("body", "")]))
            .unwrap();

        match response {
            Response::Render(View::PageForm { title, form, .. }) => {
                assert_eq!(title, ADD_TITLE);
                assert!(form.contains("Required"));
                assert!(form.contains("value=\"Orphan\""));
            }
            other => panic!("unexpected response: {:?}", other),
        }
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_show_edit_form_prefilled() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::default();
        let views = WikiViews::new(&mut repo, &form, &routes);

        match views.show_edit_form("1").unwrap() {
            Response::Render(View::PageForm { title, page, form }) => {
                assert_eq!(title, "Edit FrontPage");
                assert_eq!(page.unwrap().id, "1");
                assert!(form.contains("value=\"FrontPage\""));
                assert!(form.contains(">Welcome</textarea>"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_submit_edit_invalid_keeps_stored_title() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::default();
        let response = WikiViews::new(&mut repo, &form, &routes)
            .edit("1", &controls(&[("title", ""), ("body", "Hello")]))
            .unwrap();

        assert_eq!(response.view().unwrap().title(), "Edit FrontPage");
        let page = repo.get(&PageId::new("1").unwrap()).unwrap();
        assert_eq!(page.title(), "FrontPage");
        assert_eq!(page.body(), "Welcome");
    }

    #[test]
    fn test_missing_pages_are_not_found() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::default();
        let mut views = WikiViews::new(&mut repo, &form, &routes);

        assert!(views.show("9").unwrap_err().is_not_found());
        assert!(views.show("abc").unwrap_err().is_not_found());
        assert!(views.show_edit_form("9").unwrap_err().is_not_found());
        assert!(views
            .submit_edit("9", &controls(&[("title", "t"), ("body", "b")]))
            .unwrap_err()
            .is_not_found());
        assert!(views.delete("9").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_redirects_to_list() {
        let mut repo = seeded();
        let form = Form::new(Schema::wiki_page());
        let routes = RouteUrls::new("http://localhost:6543");
        let response = WikiViews::new(&mut repo, &form, &routes).delete("1").unwrap();

        assert_eq!(response.redirect_location(), Some("http://localhost:6543/"));
        assert!(repo.is_empty());
    }
}
