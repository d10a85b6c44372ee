#![forbid(unsafe_code)]

pub mod error;
pub mod form_controller;
pub mod session;
pub mod submission_store;

pub use dynform_core::Clock;

pub use error::{FormError, SessionError, StoreError};
pub use form_controller::{FormController, SubmitOutcome};
pub use session::{FormIntent, FormOutcome, FormSession, Notice, NoticeKind};
pub use submission_store::SubmissionStore;
