use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dynform_core::time::fixed_clock;
use dynform_core::{Clock, SchemaRegistry};
use services::{FormIntent, FormSession};

use crate::app::App;
use crate::context::{UiApp, build_app_context};
use super::form_page::{FormPage, FormPageProps};

#[derive(Clone)]
struct TestApp {
    registry: Arc<SchemaRegistry>,
    initial_form: Option<String>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Dynamic Form (test)"
    }

    fn registry(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn initial_form(&self) -> Option<String> {
        self.initial_form.clone()
    }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { App {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Full app shell with context, optionally preselecting a form type.
pub fn setup_app_harness(initial_form: Option<&str>) -> ViewHarness {
    let app = Arc::new(TestApp {
        registry: Arc::new(SchemaRegistry::builtin()),
        initial_form: initial_form.map(str::to_owned),
    });
    let dom = VirtualDom::new_with_props(AppHarness, AppHarnessProps { app });
    ViewHarness { dom }
}

/// Form page rendered from an already-driven session.
pub fn setup_page_harness(session: FormSession) -> ViewHarness {
    let dom = VirtualDom::new_with_props(FormPage, FormPageProps { initial: session });
    ViewHarness { dom }
}

pub fn new_session() -> FormSession {
    FormSession::new(Arc::new(SchemaRegistry::builtin()), fixed_clock())
}

/// Apply intents in order, failing the test on the first rejected one.
pub fn drive(session: &mut FormSession, intents: impl IntoIterator<Item = FormIntent>) {
    for intent in intents {
        session.apply(intent).expect("intent applies");
    }
}
