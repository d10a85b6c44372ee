use dynform_core::model::{AnswerMap, ErrorMap, FieldDescriptor};
use dynform_core::{Progress, SchemaRegistry};

use crate::error::FormError;

//
// ─── SUBMIT OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of a submit attempt. Validation failure is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every required field was filled; the controller has been reset.
    Submitted { form_type: String, answers: AnswerMap },
    /// At least one required field was empty; nothing but the error map changed.
    Invalid(ErrorMap),
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Selected form type, its fields, and the user's in-progress answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    selected: Option<String>,
    fields: Vec<FieldDescriptor>,
    answers: AnswerMap,
    errors: ErrorMap,
    progress: Progress,
}

impl FormController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Load the fields for `form_type` and clear answers, errors and progress.
    ///
    /// An empty name deselects. An unknown name leaves the controller with no
    /// fields, exactly like the deselected state, but is reported to the caller.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownFormType` if `form_type` is not in `registry`.
    pub fn select_form(
        &mut self,
        registry: &SchemaRegistry,
        form_type: &str,
    ) -> Result<(), FormError> {
        if form_type.is_empty() {
            self.reset();
            return Ok(());
        }

        self.selected = Some(form_type.to_owned());
        self.fields = registry.lookup(form_type).to_vec();
        self.answers.clear();
        self.errors.clear();
        self.progress = Progress::ZERO;

        if registry.contains(form_type) {
            Ok(())
        } else {
            Err(FormError::UnknownFormType(form_type.to_owned()))
        }
    }

    /// Store a raw value, drop that field's error and recompute progress.
    pub fn set_field_value(&mut self, field: &str, value: impl Into<String>) {
        self.answers.set(field, value);
        self.errors.clear_field(field);
        self.progress = self.compute_progress();
    }

    #[must_use]
    pub fn compute_progress(&self) -> Progress {
        Progress::compute(&self.fields, &self.answers)
    }

    /// Check required fields and either hand back a snapshot or the errors.
    ///
    /// # Errors
    ///
    /// Returns `FormError::NoActiveForm` when no form type with fields is selected.
    pub fn validate_and_submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let form_type = match &self.selected {
            Some(form_type) if !self.fields.is_empty() => form_type.clone(),
            _ => return Err(FormError::NoActiveForm),
        };

        let mut errors = ErrorMap::new();
        for field in self.fields.iter().filter(|field| field.is_required()) {
            if !self.answers.is_filled(field.name()) {
                errors.insert(field.name(), field.required_message());
            }
        }

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Invalid(errors));
        }

        let answers = std::mem::take(&mut self.answers);
        self.reset();
        Ok(SubmitOutcome::Submitted { form_type, answers })
    }

    /// Re-open a previous submission: select its form type, then install its answers.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownFormType` if the registry no longer knows
    /// `form_type`; the answers are still installed.
    pub fn restore(
        &mut self,
        registry: &SchemaRegistry,
        form_type: &str,
        answers: AnswerMap,
    ) -> Result<(), FormError> {
        let selected = self.select_form(registry, form_type);
        self.answers = answers;
        self.progress = self.compute_progress();
        selected
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
