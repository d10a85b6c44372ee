use dioxus::prelude::*;
use services::{FormIntent, FormSession};

use crate::vm::{NoticeVm, SELECT_PLACEHOLDER, SelectorVm, map_form_page};

use super::form_fields::DynamicForm;
use super::submissions::SubmittedData;

#[component]
pub fn FormPage(initial: FormSession) -> Element {
    let mut session = use_signal(|| initial.clone());

    let dispatch = use_callback(move |intent: FormIntent| {
        // Rejections are already logged and turned into a notice by the session.
        let _ = session.write().apply(intent);
    });

    let page = map_form_page(&session.read());

    rsx! {
        div { class: "dynamic-form-container",
            header {
                h1 { "Dynamic Form" }
            }

            if let Some(notice) = page.notice {
                NoticeBanner { notice, on_intent: dispatch }
            }

            FormSelector { selector: page.selector, on_intent: dispatch }

            if let Some(form) = page.form {
                DynamicForm { form, on_intent: dispatch }
            }

            if !page.submissions.is_empty() {
                SubmittedData { groups: page.submissions, on_intent: dispatch }
            }

            footer {
                p { "© 2024 Dynamic Form Inc." }
            }
        }
    }
}

#[component]
fn FormSelector(selector: SelectorVm, on_intent: EventHandler<FormIntent>) -> Element {
    rsx! {
        div { class: "form-selector",
            label { r#for: "formType", "Select Form Type:" }
            select {
                id: "formType",
                value: "{selector.selected}",
                onchange: move |evt: FormEvent| on_intent.call(FormIntent::SelectForm(evt.value())),
                option { value: "", selected: selector.selected.is_empty(), "{SELECT_PLACEHOLDER}" }
                for form_type in selector.options {
                    option {
                        key: "{form_type}",
                        value: "{form_type}",
                        selected: form_type == selector.selected,
                        "{form_type}"
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: NoticeVm, on_intent: EventHandler<FormIntent>) -> Element {
    rsx! {
        div { class: "{notice.class}", role: "status",
            span { "{notice.message}" }
            button {
                r#type: "button",
                onclick: move |_| on_intent.call(FormIntent::DismissNotice),
                "Dismiss"
            }
        }
    }
}
