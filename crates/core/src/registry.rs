//! Form schemas keyed by form-type name.
//!
//! The JSON shape accepted by [`SchemaRegistry::from_json`] is the contract a
//! remote schema source is expected to serve:
//!
//! ```json
//! { "User Information": { "fields": [
//!     { "name": "firstName", "type": "text", "label": "First Name", "required": true }
//! ] } }
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::model::{FieldDescriptor, FieldKind, Schema, SchemaError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("form type `{0}` is declared more than once")]
    DuplicateFormType(String),

    #[error("form type `{form_type}`: {source}")]
    Schema {
        form_type: String,
        #[source]
        source: SchemaError,
    },
}

/// Read-only table of schemas in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Schema>,
}

impl SchemaRegistry {
    /// Build a registry from already-validated schemas.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateFormType` when two schemas share a name.
    pub fn new(schemas: impl IntoIterator<Item = Schema>) -> Result<Self, RegistryError> {
        let mut map = IndexMap::new();
        for schema in schemas {
            let form_type = schema.form_type().to_owned();
            if map.insert(form_type.clone(), schema).is_some() {
                return Err(RegistryError::DuplicateFormType(form_type));
            }
        }
        Ok(Self { schemas: map })
    }

    /// The built-in table shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_SCHEMAS) {
            Ok(registry) => registry,
            Err(err) => {
                // Only reachable if the embedded document is edited into an invalid state.
                tracing::error!(error = %err, "built-in schema table is invalid");
                Self::default()
            }
        }
    }

    /// Parse the schema source contract.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Json` for malformed JSON or unknown field types,
    /// `RegistryError::Schema` when a schema fails validation, and
    /// `RegistryError::DuplicateFormType` when a form type is declared twice.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let SchemaDocument(entries) = serde_json::from_str(raw)?;
        let mut schemas = Vec::with_capacity(entries.len());
        for (form_type, wire) in entries {
            let schema = wire
                .into_schema(&form_type)
                .map_err(|source| RegistryError::Schema {
                    form_type: form_type.clone(),
                    source,
                })?;
            schemas.push(schema);
        }
        let registry = Self::new(schemas)?;
        tracing::debug!(form_types = registry.len(), "schema registry loaded");
        Ok(registry)
    }

    /// Serialize back into the schema source contract.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let document: IndexMap<&str, SchemaWire> = self
            .schemas
            .iter()
            .map(|(name, schema)| (name.as_str(), SchemaWire::from_schema(schema)))
            .collect();
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Fields for `form_type`, or an empty slice for unknown names.
    #[must_use]
    pub fn lookup(&self, form_type: &str) -> &[FieldDescriptor] {
        self.schemas
            .get(form_type)
            .map(Schema::fields)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, form_type: &str) -> Option<&Schema> {
        self.schemas.get(form_type)
    }

    #[must_use]
    pub fn contains(&self, form_type: &str) -> bool {
        self.schemas.contains_key(form_type)
    }

    pub fn form_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

/// Top-level object kept as a list of entries, so repeated keys reach
/// [`SchemaRegistry::new`] instead of overwriting each other.
struct SchemaDocument(Vec<(String, SchemaWire)>);

impl<'de> Deserialize<'de> for SchemaDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SchemaDocumentVisitor;

        impl<'de> serde::de::Visitor<'de> for SchemaDocumentVisitor {
            type Value = SchemaDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object mapping form type names to schemas")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, SchemaWire>()? {
                    entries.push(entry);
                }
                Ok(SchemaDocument(entries))
            }
        }

        deserializer.deserialize_map(SchemaDocumentVisitor)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SchemaWire {
    fields: Vec<FieldWire>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FieldWire {
    name: String,
    #[serde(rename = "type")]
    kind: KindWire,
    label: String,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindWire {
    Text,
    Number,
    Date,
    Password,
    Dropdown,
}

impl SchemaWire {
    fn into_schema(self, form_type: &str) -> Result<Schema, SchemaError> {
        let fields = self
            .fields
            .into_iter()
            .map(FieldWire::into_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        Schema::new(form_type, fields)
    }

    fn from_schema(schema: &Schema) -> Self {
        Self {
            fields: schema.fields().iter().map(FieldWire::from_descriptor).collect(),
        }
    }
}

impl FieldWire {
    fn into_descriptor(self) -> Result<FieldDescriptor, SchemaError> {
        let kind = match self.kind {
            KindWire::Text => FieldKind::Text,
            KindWire::Number => FieldKind::Number,
            KindWire::Date => FieldKind::Date,
            KindWire::Password => FieldKind::Password,
            KindWire::Dropdown => FieldKind::Dropdown(self.options.unwrap_or_default()),
        };
        FieldDescriptor::new(self.name, kind, self.label, self.required)
    }

    fn from_descriptor(field: &FieldDescriptor) -> Self {
        let (kind, options) = match field.kind() {
            FieldKind::Text => (KindWire::Text, None),
            FieldKind::Number => (KindWire::Number, None),
            FieldKind::Date => (KindWire::Date, None),
            FieldKind::Password => (KindWire::Password, None),
            FieldKind::Dropdown(options) => (KindWire::Dropdown, Some(options.clone())),
        };
        Self {
            name: field.name().to_owned(),
            kind,
            label: field.label().to_owned(),
            required: field.is_required(),
            options,
        }
    }
}

const BUILTIN_SCHEMAS: &str = r#"{
  "User Information": {
    "fields": [
      { "name": "firstName", "type": "text", "label": "First Name", "required": true },
      { "name": "lastName", "type": "text", "label": "Last Name", "required": true },
      { "name": "age", "type": "number", "label": "Age", "required": false }
    ]
  },
  "Address Information": {
    "fields": [
      { "name": "street", "type": "text", "label": "Street", "required": true },
      { "name": "city", "type": "text", "label": "City", "required": true },
      {
        "name": "state",
        "type": "dropdown",
        "label": "State",
        "options": ["California", "Texas", "New York"],
        "required": true
      },
      { "name": "zipCode", "type": "text", "label": "Zip Code", "required": false }
    ]
  },
  "Payment Information": {
    "fields": [
      { "name": "cardNumber", "type": "text", "label": "Card Number", "required": true },
      { "name": "expiryDate", "type": "date", "label": "Expiry Date", "required": true },
      { "name": "cvv", "type": "password", "label": "CVV", "required": true },
      { "name": "cardholderName", "type": "text", "label": "Cardholder Name", "required": true }
    ]
  }
}"#;

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_form_types_in_order() {
        let registry = SchemaRegistry::builtin();
        let names: Vec<&str> = registry.form_types().collect();
        assert_eq!(
            names,
            vec![
                "User Information",
                "Address Information",
                "Payment Information"
            ]
        );
    }

    #[test]
    fn builtin_user_information_fields() {
        let registry = SchemaRegistry::builtin();
        let fields = registry.lookup("User Information");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name(), "firstName");
        assert!(fields[1].is_required());
        assert_eq!(fields[2].kind(), &FieldKind::Number);
        assert!(!fields[2].is_required());
    }

    #[test]
    fn builtin_state_dropdown_options() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.get("Address Information").unwrap();
        let state = schema.field("state").unwrap();
        assert_eq!(
            state.kind().options().unwrap(),
            ["California", "Texas", "New York"]
        );
    }

    #[test]
    fn unknown_form_type_is_empty() {
        let registry = SchemaRegistry::builtin();
        assert!(registry.lookup("Shipping").is_empty());
        assert!(registry.get("Shipping").is_none());
        assert!(!registry.contains("Shipping"));
    }

    #[test]
    fn json_round_trip_preserves_builtin() {
        let registry = SchemaRegistry::builtin();
        let json = registry.to_json().unwrap();
        let parsed = SchemaRegistry::from_json(&json).unwrap();
        assert_eq!(parsed, registry);
    }

    #[test]
    fn required_defaults_to_false() {
        let raw = r#"{ "Notes": { "fields": [ { "name": "body", "type": "text", "label": "Body" } ] } }"#;
        let registry = SchemaRegistry::from_json(raw).unwrap();
        assert!(!registry.lookup("Notes")[0].is_required());
    }

    #[test]
    fn dropdown_without_options_is_rejected() {
        let raw = r#"{ "Pick": { "fields": [ { "name": "x", "type": "dropdown", "label": "X" } ] } }"#;
        let err = SchemaRegistry::from_json(raw).unwrap_err();
        match err {
            RegistryError::Schema { form_type, source } => {
                assert_eq!(form_type, "Pick");
                assert_eq!(source, SchemaError::MissingOptions { field: "x".into() });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_form_type_is_rejected() {
        let raw = r#"{
            "Notes": { "fields": [ { "name": "a", "type": "text", "label": "A", "required": true } ] },
            "Notes": { "fields": [ { "name": "b", "type": "text", "label": "B" } ] }
        }"#;
        match SchemaRegistry::from_json(raw) {
            Err(RegistryError::DuplicateFormType(form_type)) => assert_eq!(form_type, "Notes"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn truncated_document_is_rejected() {
        let raw = r#"{ "Notes": { "fields": [ { "name": "body", "type": "text""#;
        assert!(matches!(
            SchemaRegistry::from_json(raw),
            Err(RegistryError::Json(_))
        ));
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(matches!(
            SchemaRegistry::from_json(r#"["User Information"]"#),
            Err(RegistryError::Json(_))
        ));
    }

    #[test]
    fn unknown_field_type_is_rejected() {
        let raw = r#"{ "Pick": { "fields": [ { "name": "x", "type": "color", "label": "X" } ] } }"#;
        assert!(matches!(
            SchemaRegistry::from_json(raw),
            Err(RegistryError::Json(_))
        ));
    }
}
