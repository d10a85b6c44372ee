mod intent;
mod service;

pub use intent::{
    DELETED_MESSAGE, FormIntent, FormOutcome, Notice, NoticeKind, SUBMITTED_MESSAGE,
};
pub use service::FormSession;
