use std::collections::HashSet;

use crate::model::field::{FieldDescriptor, SchemaError};

/// Ordered field definition for one form type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    form_type: String,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Creates a schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EmptyFormType` for a blank name and
    /// `SchemaError::DuplicateField` when two fields share a name.
    pub fn new(
        form_type: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self, SchemaError> {
        let form_type = form_type.into().trim().to_owned();
        if form_type.is_empty() {
            return Err(SchemaError::EmptyFormType);
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField {
                    field: field.name().to_owned(),
                });
            }
        }

        Ok(Self { form_type, fields })
    }

    #[must_use]
    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name() == name)
    }
}
