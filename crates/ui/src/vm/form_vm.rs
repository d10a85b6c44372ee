use dynform_core::Progress;
use dynform_core::model::{FieldDescriptor, FieldKind};
use services::{FormSession, Notice, NoticeKind};

use crate::vm::submissions_vm::{SubmissionGroupVm, map_submission_groups};

/// Sentinel option for "nothing selected".
pub const SELECT_PLACEHOLDER: &str = "--Select--";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorVm {
    pub options: Vec<String>,
    /// Empty when no form type is selected.
    pub selected: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlVm {
    Input { input_type: &'static str },
    Select { options: Vec<String> },
}

impl From<&FieldKind> for ControlVm {
    fn from(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Input { input_type: "text" },
            FieldKind::Number => Self::Input {
                input_type: "number",
            },
            FieldKind::Date => Self::Input { input_type: "date" },
            FieldKind::Password => Self::Input {
                input_type: "password",
            },
            FieldKind::Dropdown(options) => Self::Select {
                options: options.clone(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldVm {
    pub name: String,
    pub label: String,
    pub control: ControlVm,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
    pub complete: bool,
    pub color: &'static str,
}

impl From<Progress> for ProgressVm {
    fn from(progress: Progress) -> Self {
        let complete = progress.is_complete();
        Self {
            percent: progress.value(),
            complete,
            color: if complete { "green" } else { "blue" },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormVm {
    pub fields: Vec<FieldVm>,
    pub progress: ProgressVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub class: &'static str,
    pub message: String,
}

impl From<&Notice> for NoticeVm {
    fn from(notice: &Notice) -> Self {
        let class = match notice.kind {
            NoticeKind::Success => "notice success",
            NoticeKind::Info => "notice info",
            NoticeKind::Error => "notice error",
        };
        Self {
            class,
            message: notice.message.clone(),
        }
    }
}

/// Everything the form page renders, derived from session state alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPageVm {
    pub selector: SelectorVm,
    /// `None` while the active field list is empty.
    pub form: Option<FormVm>,
    pub submissions: Vec<SubmissionGroupVm>,
    pub notice: Option<NoticeVm>,
}

#[must_use]
pub fn map_form_page(session: &FormSession) -> FormPageVm {
    let form = session.form();

    let selector = SelectorVm {
        options: session.registry().form_types().map(str::to_owned).collect(),
        selected: form.selected().unwrap_or_default().to_owned(),
    };

    let form_vm = (!form.fields().is_empty()).then(|| FormVm {
        fields: form
            .fields()
            .iter()
            .map(|field| map_field(field, session))
            .collect(),
        progress: ProgressVm::from(form.progress()),
    });

    FormPageVm {
        selector,
        form: form_vm,
        submissions: map_submission_groups(session.submissions().records()),
        notice: session.notice().map(NoticeVm::from),
    }
}

fn map_field(field: &FieldDescriptor, session: &FormSession) -> FieldVm {
    let form = session.form();
    FieldVm {
        name: field.name().to_owned(),
        label: field.label().to_owned(),
        control: ControlVm::from(field.kind()),
        value: form
            .answers()
            .get(field.name())
            .unwrap_or_default()
            .to_owned(),
        error: form.errors().get(field.name()).map(str::to_owned),
    }
}
