use chrono::SecondsFormat;
use dynform_core::model::SubmissionRecord;

/// One table of submitted records sharing a form type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionGroupVm {
    pub form_type: String,
    /// Union of answer keys across the group, in first-seen order.
    pub headers: Vec<String>,
    pub rows: Vec<SubmissionRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRowVm {
    /// Position in the submission store; what Edit/Delete act on.
    pub index: usize,
    pub cells: Vec<String>,
    pub submitted_at_str: String,
}

/// Group records by form type, preserving first appearance, and pad every row
/// to its group's header set.
#[must_use]
pub fn map_submission_groups(records: &[SubmissionRecord]) -> Vec<SubmissionGroupVm> {
    let mut groups: Vec<(String, Vec<(usize, &SubmissionRecord)>)> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match groups
            .iter_mut()
            .find(|(form_type, _)| form_type == record.form_type())
        {
            Some((_, members)) => members.push((index, record)),
            None => groups.push((record.form_type().to_owned(), vec![(index, record)])),
        }
    }

    groups
        .into_iter()
        .map(|(form_type, members)| build_group(form_type, &members))
        .collect()
}

fn build_group(form_type: String, members: &[(usize, &SubmissionRecord)]) -> SubmissionGroupVm {
    let mut headers: Vec<String> = Vec::new();
    for (_, record) in members {
        for key in record.answers().keys() {
            if !headers.iter().any(|header| header == key) {
                headers.push(key.to_owned());
            }
        }
    }

    let rows = members
        .iter()
        .map(|(index, record)| SubmissionRowVm {
            index: *index,
            cells: headers
                .iter()
                .map(|header| {
                    record
                        .answers()
                        .get(header)
                        .unwrap_or_default()
                        .to_owned()
                })
                .collect(),
            submitted_at_str: record
                .submitted_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        })
        .collect();

    SubmissionGroupVm {
        form_type,
        headers,
        rows,
    }
}
