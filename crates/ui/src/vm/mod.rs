mod form_vm;
mod submissions_vm;

pub use form_vm::{
    ControlVm, FieldVm, FormPageVm, FormVm, NoticeVm, ProgressVm, SELECT_PLACEHOLDER, SelectorVm,
    map_form_page,
};
pub use submissions_vm::{SubmissionGroupVm, SubmissionRowVm, map_submission_groups};
