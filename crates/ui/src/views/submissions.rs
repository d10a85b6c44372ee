use dioxus::prelude::*;
use services::FormIntent;

use crate::vm::{SubmissionGroupVm, SubmissionRowVm};

#[component]
pub fn SubmittedData(
    groups: Vec<SubmissionGroupVm>,
    on_intent: EventHandler<FormIntent>,
) -> Element {
    rsx! {
        div { class: "submitted-data",
            h2 { "Submitted Data" }
            for group in groups {
                SubmissionTable { key: "{group.form_type}", group: group.clone(), on_intent }
            }
        }
    }
}

#[component]
fn SubmissionTable(group: SubmissionGroupVm, on_intent: EventHandler<FormIntent>) -> Element {
    rsx! {
        section { class: "submission-group",
            h3 { "{group.form_type}" }
            table {
                thead {
                    tr {
                        for header in group.headers.iter() {
                            th { key: "{header}", "{header}" }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    for row in group.rows.iter() {
                        SubmissionRow { key: "{row.index}", row: row.clone(), on_intent }
                    }
                }
            }
        }
    }
}

#[component]
fn SubmissionRow(row: SubmissionRowVm, on_intent: EventHandler<FormIntent>) -> Element {
    let index = row.index;

    rsx! {
        tr { title: "Submitted {row.submitted_at_str}",
            for (position, cell) in row.cells.iter().enumerate() {
                td { key: "{position}", "{cell}" }
            }
            td {
                button {
                    r#type: "button",
                    onclick: move |_| on_intent.call(FormIntent::Edit(index)),
                    "Edit"
                }
                button {
                    r#type: "button",
                    onclick: move |_| on_intent.call(FormIntent::Delete(index)),
                    "Delete"
                }
            }
        }
    }
}
