use dioxus::prelude::*;
use services::FormIntent;

use crate::vm::{ControlVm, FieldVm, FormVm, ProgressVm, SELECT_PLACEHOLDER};

#[component]
pub fn DynamicForm(form: FormVm, on_intent: EventHandler<FormIntent>) -> Element {
    rsx! {
        form {
            class: "dynamic-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_intent.call(FormIntent::Submit);
            },
            for field in form.fields {
                FieldControl { key: "{field.name}", field: field.clone(), on_intent }
            }
            ProgressBar { progress: form.progress }
            button { r#type: "submit", class: "submit-btn", "Submit" }
        }
    }
}

#[component]
fn FieldControl(field: FieldVm, on_intent: EventHandler<FormIntent>) -> Element {
    let name = field.name.clone();
    let on_value = move |evt: FormEvent| {
        on_intent.call(FormIntent::set_field(name.clone(), evt.value()));
    };

    rsx! {
        div { class: "form-field",
            label { r#for: "{field.name}", "{field.label}:" }
            match field.control {
                ControlVm::Select { options } => rsx! {
                    select {
                        id: "{field.name}",
                        value: "{field.value}",
                        onchange: on_value,
                        option {
                            value: "",
                            selected: field.value.is_empty(),
                            "{SELECT_PLACEHOLDER}"
                        }
                        for option_value in options {
                            option {
                                key: "{option_value}",
                                value: "{option_value}",
                                selected: option_value == field.value,
                                "{option_value}"
                            }
                        }
                    }
                },
                ControlVm::Input { input_type } => rsx! {
                    input {
                        id: "{field.name}",
                        r#type: "{input_type}",
                        value: "{field.value}",
                        oninput: on_value,
                    }
                },
            }
            if let Some(error) = field.error {
                span { class: "error-message", "{error}" }
            }
        }
    }
}

#[component]
fn ProgressBar(progress: ProgressVm) -> Element {
    let class = if progress.complete {
        "progress complete"
    } else {
        "progress"
    };

    rsx! {
        div { class: "progress-bar",
            div {
                class,
                style: "width: {progress.percent}%; background-color: {progress.color};",
            }
        }
    }
}
