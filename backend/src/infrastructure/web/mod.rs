mod server;
mod templates;

pub use server::{build_router, serve, AppState, WebError, WebResult};
pub use templates::{HtmlTemplates, JsonTemplates, TemplateRenderer};
