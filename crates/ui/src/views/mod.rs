mod form_fields;
mod form_page;
mod submissions;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use form_fields::DynamicForm;
pub use form_page::FormPage;
pub use submissions::SubmittedData;
