/// Validation of submitted form controls against a schema
use super::schema::Schema;

pub const REQUIRED_MESSAGE: &str = "Required";

/// Validated values, keyed by field name in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appstruct {
    values: Vec<(String, String)>,
}

impl Appstruct {
    pub fn new(values: Vec<(String, String)>) -> Self {
        Appstruct { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Error attached to a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Everything needed to re-render a rejected submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Submitted values for each schema field, empty when nothing was sent
    cstruct: Appstruct,
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn submitted(&self) -> &Appstruct {
        &self.cstruct
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Outcome of validating a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(Appstruct),
    Invalid(ValidationFailure),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

impl Schema {
    /// Check submitted `(name, value)` controls against the schema.
    ///
    /// Controls that match no field are ignored. A repeated control keeps its
    /// last value. Values are trimmed unless the field opts out, and absent or
    /// empty values then fail required fields.
    pub fn validate(&self, controls: &[(String, String)]) -> Validation {
        let mut cstruct = Vec::with_capacity(self.fields().len());
        let mut appstruct = Vec::with_capacity(self.fields().len());
        let mut errors = Vec::new();

        for field in self.fields() {
            let submitted = controls
                .iter()
                .rev()
                .find(|(name, _)| name == field.name())
                .map(|(_, value)| {
                    if field.strips() {
                        value.trim()
                    } else {
                        value.as_str()
                    }
                });

            cstruct.push((
                field.name().to_string(),
                submitted.unwrap_or_default().to_string(),
            ));

            match submitted.filter(|value| !value.is_empty()) {
                Some(value) => appstruct.push((field.name().to_string(), value.to_string())),
                None => match field.missing() {
                    Some(default) if !field.is_required() => {
                        appstruct.push((field.name().to_string(), default.to_string()))
                    }
                    _ => errors.push(FieldError {
                        field: field.name().to_string(),
                        message: REQUIRED_MESSAGE.to_string(),
                    }),
                },
            }
        }

        if errors.is_empty() {
            Validation::Valid(Appstruct::new(appstruct))
        } else {
            Validation::Invalid(ValidationFailure {
                cstruct: Appstruct::new(cstruct),
                errors,
            })
        }
    }
}
