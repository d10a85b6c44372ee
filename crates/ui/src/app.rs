use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::FormPage;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let initial = use_hook(|| ctx.start_session());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{ctx.app_name()}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                FormPage { initial }
            }
        }
    }
}
