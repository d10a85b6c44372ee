use dynform_core::Progress;

/// A discrete user action against the form page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormIntent {
    /// Pick a form type; the empty string is the "not selected" sentinel.
    SelectForm(String),
    SetField { name: String, value: String },
    Submit,
    /// Pull the submission at this index back into the form.
    Edit(usize),
    Delete(usize),
    DismissNotice,
}

impl FormIntent {
    #[must_use]
    pub fn set_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetField {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn select(form_type: impl Into<String>) -> Self {
        Self::SelectForm(form_type.into())
    }
}

/// What a successfully applied intent did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Selected { form_type: Option<String> },
    FieldUpdated { progress: Progress },
    Submitted { index: usize },
    Invalid { missing: usize },
    Editing { form_type: String },
    Deleted { remaining: usize },
    NoticeDismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Transient acknowledgement shown after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";
pub const DELETED_MESSAGE: &str = "Entry deleted successfully.";

impl Notice {
    #[must_use]
    pub fn submitted() -> Self {
        Self {
            kind: NoticeKind::Success,
            message: SUBMITTED_MESSAGE.to_owned(),
        }
    }

    #[must_use]
    pub fn deleted() -> Self {
        Self {
            kind: NoticeKind::Info,
            message: DELETED_MESSAGE.to_owned(),
        }
    }

    #[must_use]
    pub fn error(err: &impl std::fmt::Display) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: err.to_string(),
        }
    }
}
