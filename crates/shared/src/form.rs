use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Field name to first error message, for re-rendering a form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();

        for (field, errors) in errors.field_errors() {
            let Some(error) = errors.first() else {
                continue;
            };

            let message = match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            };

            fields.insert(field.to_string(), message);
        }

        fields
    }
}
