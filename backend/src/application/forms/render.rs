/// HTML form rendering for a schema
use super::schema::{FieldSpec, Schema, Widget, WidgetResources};
use super::validation::{Appstruct, Validation, ValidationFailure};
use maud::{html, Markup};

pub const DEFAULT_FORM_ID: &str = "deform";
pub const FORM_ERROR_MESSAGE: &str = "There was a problem with your submission";

/// A form bound to a schema, with its submit buttons
#[derive(Debug, Clone)]
pub struct Form {
    schema: Schema,
    buttons: Vec<String>,
    form_id: String,
}

impl Form {
    pub fn new(schema: Schema) -> Self {
        Form {
            schema,
            buttons: vec!["submit".to_string()],
            form_id: DEFAULT_FORM_ID.to_string(),
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<String>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
        self.form_id = form_id.into();
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn validate(&self, controls: &[(String, String)]) -> Validation {
        self.schema.validate(controls)
    }

    /// Render the form, pre-filled from `initial` when given
    pub fn render(&self, initial: Option<&Appstruct>) -> String {
        self.render_fields(initial, None).into_string()
    }

    /// Re-render a rejected submission with its values and error annotations
    pub fn render_with_errors(&self, failure: &ValidationFailure) -> String {
        self.render_fields(Some(failure.submitted()), Some(failure))
            .into_string()
    }

    /// Client-side resources needed by the widgets of this form
    pub fn widget_resources(&self) -> WidgetResources {
        let mut resources = WidgetResources::default();
        for field in self.schema.fields() {
            resources.merge(field.widget().resources());
        }
        resources
    }

    fn render_fields(
        &self,
        values: Option<&Appstruct>,
        failure: Option<&ValidationFailure>,
    ) -> Markup {
        html! {
            form id=(self.form_id) action="" method="POST" accept-charset="utf-8" class="deform" {
                input type="hidden" name="__formid__" value=(self.form_id);
                @if failure.is_some() {
                    div class="alert alert-danger" { (FORM_ERROR_MESSAGE) }
                }
                @for field in self.schema.fields() {
                    (self.render_field(
                        field,
                        values.and_then(|v| v.get(field.name())).unwrap_or_default(),
                        failure.and_then(|f| f.error_for(field.name())),
                    ))
                }
                @for button in &self.buttons {
                    button id={ (self.form_id) (button) } name=(button) type="submit" value=(button) class="btn btn-primary" {
                        (capitalize(button))
                    }
                }
            }
        }
    }

    fn render_field(&self, field: &FieldSpec, value: &str, error: Option<&str>) -> Markup {
        let input_id = format!("{}-field-{}", self.form_id, field.name());
        let group_class = if error.is_some() {
            "form-group has-error"
        } else {
            "form-group"
        };
        let label_class = if field.is_required() {
            "control-label required"
        } else {
            "control-label"
        };

        html! {
            div class=(group_class) id={ "item-" (input_id) } {
                label for=(input_id) class=(label_class) { (field.title()) }
                @match field.widget() {
                    Widget::TextInput => {
                        input type="text" name=(field.name()) value=(value) id=(input_id) class="form-control";
                    }
                    Widget::RichText => {
                        textarea name=(field.name()) id=(input_id) class="form-control richtext" { (value) }
                    }
                }
                @if let Some(message) = error {
                    p class="help-block error" id={ "error-" (input_id) } { (message) }
                }
            }
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wiki_form() -> Form {
        Form::new(Schema::wiki_page())
    }

    #[test]
    fn test_render_empty_form() {
        let html = wiki_form().render(None);

        assert!(html.starts_with("<form id=\"deform\""));
        assert!(html.contains("name=\"__formid__\" value=\"deform\""));
        assert!(html.contains("<input type=\"text\" name=\"title\" value=\"\""));
        assert!(html.contains("<textarea name=\"body\" id=\"deform-field-body\" class=\"form-control richtext\"></textarea>"));
        assert!(html.contains(">Submit</button>"));
        assert!(!html.contains(FORM_ERROR_MESSAGE));
    }

    #[test]
    fn test_render_prefilled_escapes_values() {
        let initial = Appstruct::new(vec![
            ("title".to_string(), "Tom & \"Jerry\"".to_string()),
            ("body".to_string(), "<em>100</em>".to_string()),
        ]);
        let html = wiki_form().render(Some(&initial));

        assert!(html.contains("value=\"Tom &amp; &quot;Jerry&quot;\""));
        assert!(html.contains(">&lt;em&gt;100&lt;/em&gt;</textarea>"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_render_with_errors_keeps_values() {
        let form = wiki_form();
        let controls = vec![
            ("title".to_string(), String::new()),
            ("body".to_string(), "Hello".to_string()),
        ];
        let failure = match form.validate(&controls) {
            Validation::Invalid(failure) => failure,
            Validation::Valid(_) => panic!("expected failure"),
        };

        let html = form.render_with_errors(&failure);

        assert!(html.contains(FORM_ERROR_MESSAGE));
        assert!(html.contains("class=\"form-group has-error\" id=\"item-deform-field-title\""));
        assert!(html.contains("id=\"error-deform-field-title\">Required</p>"));
        assert!(!html.contains("error-deform-field-body"));
        assert!(html.contains(">Hello</textarea>"));
    }

    #[test]
    fn test_widget_resources_for_rich_text() {
        let resources = wiki_form().widget_resources();
        assert_eq!(resources.js, vec!["deform:static/tinymce/tinymce.min.js".to_string()]);

        let plain = Form::new(Schema::new(vec![FieldSpec::text("title")]));
        assert!(plain.widget_resources().is_empty());
    }

    #[test]
    fn test_custom_buttons_and_id() {
        let html = wiki_form()
            .with_form_id("wiki")
            .with_buttons(vec!["save".to_string(), "cancel".to_string()])
            .render(None);

        assert!(html.contains("id=\"wiki-field-title\""));
        assert!(html.contains("id=\"wikisave\" name=\"save\""));
        assert!(html.contains(">Cancel</button>"));
    }

    #[test]
    fn test_form_id_is_escaped() {
        let html = wiki_form().with_form_id("a\"b").render(None);
        assert!(html.starts_with("<form id=\"a&quot;b\""));
    }
}
