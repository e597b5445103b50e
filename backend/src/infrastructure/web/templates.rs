/// Template collaborators that turn view payloads into response bodies
use crate::application::dto::{PageView, View};
use crate::application::forms::WidgetResources;
use crate::application::routes::RouteUrls;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Renders a controller view into a response body
pub trait TemplateRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    /// `resources` are the client-side assets the form widgets need
    fn render(&self, view: &View, resources: &WidgetResources) -> String;
}

/// HTML pages sharing one layout; links go through the same `RouteUrls` as redirects
#[derive(Debug, Clone)]
pub struct HtmlTemplates {
    routes: RouteUrls,
    static_prefix: String,
}

impl HtmlTemplates {
    pub fn new(routes: RouteUrls) -> Self {
        HtmlTemplates {
            routes,
            static_prefix: "/static".to_string(),
        }
    }

    pub fn with_static_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.static_prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    /// "deform:static/x.js" -> "<prefix>/deform/x.js"
    fn asset_url(&self, asset: &str) -> String {
        match asset.split_once(':') {
            Some((package, path)) => {
                let path = path.strip_prefix("static/").unwrap_or(path);
                format!("{}/{}/{}", self.static_prefix, package, path)
            }
            None => format!("{}/{}", self.static_prefix, asset),
        }
    }

    fn layout(&self, title: &str, resources: &WidgetResources, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { "Wiki - " (title) }
                    @for css in &resources.css {
                        link rel="stylesheet" href=(self.asset_url(css));
                    }
                    @for js in &resources.js {
                        script src=(self.asset_url(js)) {}
                    }
                }
                body {
                    div id="header" { a href=(self.routes.wiki_view()) { "Wiki" } }
                    h1 { (title) }
                    (content)
                }
            }
        }
    }

    fn page_list(&self, pages: &[PageView]) -> Markup {
        html! {
            p { a href=(self.routes.wikipage_add()) { "Add WikiPage" } }
            ul {
                @for page in pages {
                    li { a href=(self.routes.wikipage_view(&page.id)) { (page.title) } }
                }
            }
        }
    }

    fn page_detail(&self, page: &PageView) -> Markup {
        html! {
            p {
                a href=(self.routes.wikipage_edit(&page.id)) { "Edit" }
                " "
                a href=(self.routes.wikipage_delete(&page.id)) { "Delete" }
            }
            // Bodies are rich text
            div class="body" { (PreEscaped(&page.body)) }
        }
    }
}

impl TemplateRenderer for HtmlTemplates {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, view: &View, resources: &WidgetResources) -> String {
        let no_resources = WidgetResources::default();
        let markup = match view {
            View::WikiList { title, pages } => {
                self.layout(title, &no_resources, self.page_list(pages))
            }
            View::PageDetail { title, page } => {
                self.layout(title, &no_resources, self.page_detail(page))
            }
            // The form is markup already produced by `Form`
            View::PageForm { title, form, .. } => {
                self.layout(title, resources, PreEscaped(form.clone()))
            }
        };
        markup.into_string()
    }
}

/// Serializes the view payload for programmatic clients
#[derive(Debug, Clone, Default)]
pub struct JsonTemplates;

impl TemplateRenderer for JsonTemplates {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, view: &View, _resources: &WidgetResources) -> String {
        serde_json::json!({
            "template": view.template_name(),
            "view": view,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageView {
        PageView {
            id: "100".to_string(),
            title: "Page <100>".to_string(),
            body: "<em>100</em>".to_string(),
        }
    }

    fn rich_text_resources() -> WidgetResources {
        WidgetResources {
            js: vec!["deform:static/tinymce/tinymce.min.js".to_string()],
            css: Vec::new(),
        }
    }

    fn templates() -> HtmlTemplates {
        HtmlTemplates::new(RouteUrls::default())
    }

    #[test]
    fn test_list_links_each_page() {
        let view = View::WikiList {
            title: "Welcome to the Wiki".to_string(),
            pages: vec![page()],
        };
        let html = templates().render(&view, &rich_text_resources());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Wiki - Welcome to the Wiki</title>"));
        assert!(html.contains("<a href=\"/100\">Page &lt;100&gt;</a>"));
        assert!(html.contains("<a href=\"/add\">Add WikiPage</a>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_detail_keeps_rich_body() {
        let view = View::PageDetail {
            title: "Page 100".to_string(),
            page: page(),
        };
        let html = templates().render(&view, &WidgetResources::default());

        assert!(html.contains("<div class=\"body\"><em>100</em></div>"));
        assert!(html.contains("href=\"/100/edit\""));
        assert!(html.contains("href=\"/100/delete\""));
    }

    #[test]
    fn test_links_follow_base_url() {
        let view = View::PageDetail {
            title: "Page 100".to_string(),
            page: page(),
        };
        let html = HtmlTemplates::new(RouteUrls::new("/wiki"))
            .render(&view, &WidgetResources::default());

        assert!(html.contains("<a href=\"/wiki/\">Wiki</a>"));
        assert!(html.contains("href=\"/wiki/100/edit\""));
        assert!(html.contains("href=\"/wiki/100/delete\""));
    }

    #[test]
    fn test_form_includes_widget_scripts() {
        let view = View::PageForm {
            title: "Add Wiki Page".to_string(),
            page: None,
            form: "<form></form>".to_string(),
        };
        let html = templates()
            .with_static_prefix("/assets/")
            .render(&view, &rich_text_resources());

        assert!(html.contains("<script src=\"/assets/deform/tinymce/tinymce.min.js\"></script>"));
        assert!(html.contains("<form></form>"));
    }

    #[test]
    fn test_json_payload() {
        let view = View::PageDetail {
            title: "Page 100".to_string(),
            page: page(),
        };
        let body = JsonTemplates.render(&view, &WidgetResources::default());
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["template"], "wikipage_view");
        assert_eq!(json["view"]["page"]["id"], "100");
        assert_eq!(json["view"]["title"], "Page 100");
    }
}
