mod answers;
mod field;
mod schema;
mod submission;

pub use answers::{AnswerMap, ErrorMap};
pub use field::{FieldDescriptor, FieldKind, SchemaError};
pub use schema::Schema;
pub use submission::SubmissionRecord;
