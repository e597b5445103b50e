pub mod render;
pub mod schema;
pub mod validation;

pub use render::Form;
pub use schema::{FieldSpec, Schema, Widget, WidgetResources};
pub use validation::{Appstruct, FieldError, Validation, ValidationFailure};
