use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("form type name cannot be empty")]
    EmptyFormType,

    #[error("field name cannot be empty")]
    EmptyFieldName,

    #[error("field `{field}` needs a label")]
    EmptyLabel { field: String },

    #[error("dropdown field `{field}` needs at least one option")]
    MissingOptions { field: String },

    #[error("field `{field}` is declared more than once")]
    DuplicateField { field: String },
}

//
// ─── FIELD KIND ────────────────────────────────────────────────────────────────
//

/// The control a field is rendered with.
///
/// Values are always stored as raw strings regardless of kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Dropdown(Vec<String>),
}

impl FieldKind {
    /// Wire name used by the schema data source.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Password => "password",
            FieldKind::Dropdown(_) => "dropdown",
        }
    }

    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Dropdown(options) => Some(options),
            _ => None,
        }
    }
}

//
// ─── FIELD DESCRIPTOR ──────────────────────────────────────────────────────────
//

/// Metadata for one input of a form schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    label: String,
    required: bool,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EmptyFieldName` or `SchemaError::EmptyLabel` for blank
    /// identifiers, and `SchemaError::MissingOptions` for a dropdown without options.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        label: impl Into<String>,
        required: bool,
    ) -> Result<Self, SchemaError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }

        let label = label.into().trim().to_owned();
        if label.is_empty() {
            return Err(SchemaError::EmptyLabel { field: name });
        }

        if let FieldKind::Dropdown(options) = &kind {
            if options.is_empty() {
                return Err(SchemaError::MissingOptions { field: name });
            }
        }

        Ok(Self {
            name,
            kind,
            label,
            required,
        })
    }

    /// Shorthand for a required field.
    ///
    /// # Errors
    ///
    /// See [`FieldDescriptor::new`].
    pub fn required(
        name: impl Into<String>,
        kind: FieldKind,
        label: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        Self::new(name, kind, label, true)
    }

    /// Shorthand for an optional field.
    ///
    /// # Errors
    ///
    /// See [`FieldDescriptor::new`].
    pub fn optional(
        name: impl Into<String>,
        kind: FieldKind,
        label: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        Self::new(name, kind, label, false)
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Message shown when a required field is left empty on submit.
    #[must_use]
    pub fn required_message(&self) -> String {
        format!("{} is required.", self.label)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
