use crate::domain::{aggregates::Page, base::Entity};
use serde::Serialize;

/// A page record as handed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl From<&Page> for PageView {
    fn from(page: &Page) -> Self {
        PageView {
            id: page.id().as_str().to_string(),
            title: page.title().to_string(),
            body: page.body().to_string(),
        }
    }
}

/// Payload for the template collaborator.
///
/// Serializes to a flat object: `title` plus `pages`, `page` or `form`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum View {
    /// All pages
    WikiList { title: String, pages: Vec<PageView> },
    /// A single page
    PageDetail { title: String, page: PageView },
    /// Add or edit form; `page` is set when editing
    PageForm {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<PageView>,
        form: String,
    },
}

impl View {
    /// Name of the template that renders this payload
    pub fn template_name(&self) -> &'static str {
        match self {
            View::WikiList { .. } => "wiki_view",
            View::PageDetail { .. } => "wikipage_view",
            View::PageForm { .. } => "wikipage_addedit",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            View::WikiList { title, .. }
            | View::PageDetail { title, .. }
            | View::PageForm { title, .. } => title,
        }
    }
}

/// Controller outcome: markup to render, or a client-side navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Render(View),
    Redirect(String),
}

impl Response {
    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            Response::Redirect(location) => Some(location),
            Response::Render(_) => None,
        }
    }

    pub fn view(&self) -> Option<&View> {
        match self {
            Response::Render(view) => Some(view),
            Response::Redirect(_) => None,
        }
    }
}
