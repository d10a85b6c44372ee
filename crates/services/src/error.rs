//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `FormController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    #[error("unknown form type: {0}")]
    UnknownFormType(String),
    #[error("no form is active")]
    NoActiveForm,
}

/// Errors emitted by `SubmissionStore`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("submission index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors emitted while applying an intent to a `FormSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
