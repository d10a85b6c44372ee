use std::sync::Arc;

use dynform_core::model::SubmissionRecord;
use dynform_core::{Clock, SchemaRegistry};

use super::intent::{FormIntent, FormOutcome, Notice};
use crate::error::SessionError;
use crate::form_controller::{FormController, SubmitOutcome};
use crate::submission_store::SubmissionStore;

/// All state behind the form page.
///
/// Every user action goes through [`FormSession::apply`], so the whole page can
/// be driven and inspected without a window.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSession {
    registry: Arc<SchemaRegistry>,
    clock: Clock,
    form: FormController,
    submissions: SubmissionStore,
    notice: Option<Notice>,
}

impl FormSession {
    #[must_use]
    pub fn new(registry: Arc<SchemaRegistry>, clock: Clock) -> Self {
        Self {
            registry,
            clock,
            form: FormController::new(),
            submissions: SubmissionStore::new(),
            notice: None,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    #[must_use]
    pub fn form(&self) -> &FormController {
        &self.form
    }

    #[must_use]
    pub fn submissions(&self) -> &SubmissionStore {
        &self.submissions
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Apply one user action.
    ///
    /// The previous notice is cleared first; a failed intent leaves an error notice
    /// behind in addition to returning the error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Form` for unknown form types or submitting with
    /// nothing selected, and `SessionError::Store` for stale row indices.
    pub fn apply(&mut self, intent: FormIntent) -> Result<FormOutcome, SessionError> {
        tracing::debug!(?intent, "applying form intent");
        self.notice = None;

        let result = self.dispatch(intent);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "form intent rejected");
            self.notice = Some(Notice::error(err));
        }
        result
    }

    fn dispatch(&mut self, intent: FormIntent) -> Result<FormOutcome, SessionError> {
        match intent {
            FormIntent::SelectForm(form_type) => {
                self.form.select_form(&self.registry, &form_type)?;
                Ok(FormOutcome::Selected {
                    form_type: self.form.selected().map(str::to_owned),
                })
            }
            FormIntent::SetField { name, value } => {
                self.form.set_field_value(&name, value);
                Ok(FormOutcome::FieldUpdated {
                    progress: self.form.progress(),
                })
            }
            FormIntent::Submit => self.submit(),
            FormIntent::Edit(index) => {
                let record = self.submissions.load_for_edit(index)?;
                let (form_type, answers) = record.into_parts();
                tracing::info!(index, form_type = %form_type, "editing submission");
                self.form.restore(&self.registry, &form_type, answers)?;
                Ok(FormOutcome::Editing { form_type })
            }
            FormIntent::Delete(index) => {
                self.submissions.delete(index)?;
                tracing::info!(index, remaining = self.submissions.len(), "submission deleted");
                self.notice = Some(Notice::deleted());
                Ok(FormOutcome::Deleted {
                    remaining: self.submissions.len(),
                })
            }
            FormIntent::DismissNotice => Ok(FormOutcome::NoticeDismissed),
        }
    }

    fn submit(&mut self) -> Result<FormOutcome, SessionError> {
        match self.form.validate_and_submit()? {
            SubmitOutcome::Submitted { form_type, answers } => {
                let record = SubmissionRecord::new(form_type, answers, self.clock.now());
                let index = self.submissions.append(record);
                tracing::info!(index, "form submitted");
                self.notice = Some(Notice::submitted());
                Ok(FormOutcome::Submitted { index })
            }
            SubmitOutcome::Invalid(errors) => {
                tracing::debug!(missing = errors.len(), "submit blocked by missing fields");
                Ok(FormOutcome::Invalid {
                    missing: errors.len(),
                })
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormError, StoreError};
    use crate::session::intent::{DELETED_MESSAGE, NoticeKind, SUBMITTED_MESSAGE};
    use dynform_core::time::{fixed_clock, fixed_now};

    fn session() -> FormSession {
        FormSession::new(Arc::new(SchemaRegistry::builtin()), fixed_clock())
    }

    fn submit_user(session: &mut FormSession, first: &str, last: &str) {
        session.apply(FormIntent::select("User Information")).unwrap();
        session.apply(FormIntent::set_field("firstName", first)).unwrap();
        session.apply(FormIntent::set_field("lastName", last)).unwrap();
        let outcome = session.apply(FormIntent::Submit).unwrap();
        assert!(matches!(outcome, FormOutcome::Submitted { .. }));
    }

    #[test]
    fn submit_stamps_record_with_clock() {
        let mut session = session();
        submit_user(&mut session, "Ada", "Lovelace");

        let record = session.submissions().get(0).unwrap();
        assert_eq!(record.form_type(), "User Information");
        assert_eq!(record.submitted_at(), fixed_now());
        let notice = session.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, SUBMITTED_MESSAGE);
    }

    #[test]
    fn invalid_submit_reports_missing_count() {
        let mut session = session();
        session.apply(FormIntent::select("Payment Information")).unwrap();
        session.apply(FormIntent::set_field("cvv", "123")).unwrap();
        let outcome = session.apply(FormIntent::Submit).unwrap();
        assert_eq!(outcome, FormOutcome::Invalid { missing: 3 });
        assert!(session.submissions().is_empty());
        assert!(session.notice().is_none());
    }

    #[test]
    fn delete_sets_notice() {
        let mut session = session();
        submit_user(&mut session, "Ada", "Lovelace");
        submit_user(&mut session, "Grace", "Hopper");

        let outcome = session.apply(FormIntent::Delete(0)).unwrap();
        assert_eq!(outcome, FormOutcome::Deleted { remaining: 1 });
        assert_eq!(session.notice().unwrap().message, DELETED_MESSAGE);
        let left = session.submissions().get(0).unwrap();
        assert_eq!(left.answers().get("firstName"), Some("Grace"));
    }

    #[test]
    fn edit_restores_form_type_and_answers() {
        let mut session = session();
        submit_user(&mut session, "Ada", "Lovelace");
        session.apply(FormIntent::select("Address Information")).unwrap();

        let outcome = session.apply(FormIntent::Edit(0)).unwrap();
        assert_eq!(
            outcome,
            FormOutcome::Editing {
                form_type: "User Information".into()
            }
        );
        assert!(session.submissions().is_empty());
        assert_eq!(session.form().selected(), Some("User Information"));
        assert_eq!(session.form().answers().get("lastName"), Some("Lovelace"));
        assert!(session.form().progress().is_complete());
    }

    #[test]
    fn unknown_form_type_leaves_error_notice() {
        let mut session = session();
        let err = session.apply(FormIntent::select("Shipping")).unwrap_err();
        assert_eq!(
            err,
            SessionError::Form(FormError::UnknownFormType("Shipping".into()))
        );
        assert!(session.form().fields().is_empty());
        let notice = session.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "unknown form type: Shipping");
    }

    #[test]
    fn stale_index_is_rejected() {
        let mut session = session();
        let err = session.apply(FormIntent::Delete(0)).unwrap_err();
        assert_eq!(
            err,
            SessionError::Store(StoreError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn next_intent_clears_notice() {
        let mut session = session();
        submit_user(&mut session, "Ada", "Lovelace");
        assert!(session.notice().is_some());
        session.apply(FormIntent::DismissNotice).unwrap();
        assert!(session.notice().is_none());
    }
}
