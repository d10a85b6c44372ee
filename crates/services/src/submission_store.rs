use dynform_core::model::SubmissionRecord;

use crate::error::StoreError;

/// Ordered list of submitted records for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStore {
    records: Vec<SubmissionRecord>,
}

impl SubmissionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end and return its index.
    pub fn append(&mut self, record: SubmissionRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Remove the record at `index` so it can be re-opened in the form.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if `index >= len`.
    pub fn load_for_edit(&mut self, index: usize) -> Result<SubmissionRecord, StoreError> {
        self.remove(index)
    }

    /// Remove the record at `index` permanently.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if `index >= len`.
    pub fn delete(&mut self, index: usize) -> Result<SubmissionRecord, StoreError> {
        self.remove(index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SubmissionRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmissionRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    fn remove(&mut self, index: usize) -> Result<SubmissionRecord, StoreError> {
        let len = self.records.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        Ok(self.records.remove(index))
    }
}
