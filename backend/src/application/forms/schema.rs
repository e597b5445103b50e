/// Declarative description of the fields a form accepts
use serde::Serialize;

/// Presentational hint for how a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    /// Single-line text input
    TextInput,
    /// Long-form text edited with a rich text editor
    RichText,
}

impl Widget {
    /// Client-side assets this widget needs on the page
    pub fn resources(&self) -> WidgetResources {
        match self {
            Widget::TextInput => WidgetResources::default(),
            Widget::RichText => WidgetResources {
                js: vec!["deform:static/tinymce/tinymce.min.js".to_string()],
                css: Vec::new(),
            },
        }
    }
}

/// Scripts and stylesheets required by the widgets of a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetResources {
    pub js: Vec<String>,
    pub css: Vec<String>,
}

impl WidgetResources {
    /// Merge another set in, keeping first-seen order and dropping duplicates
    pub fn merge(&mut self, other: WidgetResources) {
        for js in other.js {
            if !self.js.contains(&js) {
                self.js.push(js);
            }
        }
        for css in other.css {
            if !self.css.contains(&css) {
                self.css.push(css);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.js.is_empty() && self.css.is_empty()
    }
}

/// A single text field of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    title: String,
    required: bool,
    missing: Option<String>,
    /// Trim surrounding whitespace from submitted values before checking them
    strip: bool,
    widget: Widget,
}

impl FieldSpec {
    /// A required text field rendered as a plain text input
    pub fn text(name: impl Into<String>) -> Self {
        let name = name.into();
        FieldSpec {
            title: title_from_name(&name),
            name,
            required: true,
            missing: None,
            strip: true,
            widget: Widget::TextInput,
        }
    }

    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Make the field optional, substituting `missing` when nothing is submitted
    pub fn optional(mut self, missing: impl Into<String>) -> Self {
        self.required = false;
        self.missing = Some(missing.into());
        self
    }

    /// Keep submitted values exactly as sent
    pub fn without_strip(mut self) -> Self {
        self.strip = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn missing(&self) -> Option<&str> {
        self.missing.as_deref()
    }

    pub fn strips(&self) -> bool {
        self.strip
    }

    pub fn widget(&self) -> Widget {
        self.widget
    }
}

/// Ordered collection of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Schema { fields }
    }

    /// Schema for a wiki page: a title and a rich text body, both required
    pub fn wiki_page() -> Self {
        Schema::new(vec![
            FieldSpec::text("title"),
            FieldSpec::text("body").with_widget(Widget::RichText),
        ])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// "first_name" -> "First Name"
fn title_from_name(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
