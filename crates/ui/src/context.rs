use std::sync::Arc;

use dynform_core::{Clock, SchemaRegistry};
use services::{FormIntent, FormSession};

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn registry(&self) -> Arc<SchemaRegistry>;
    fn clock(&self) -> Clock;

    /// Form type to select when the window opens.
    fn initial_form(&self) -> Option<String> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    registry: Arc<SchemaRegistry>,
    clock: Clock,
    initial_form: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_owned(),
            registry: app.registry(),
            clock: app.clock(),
            initial_form: app.initial_form(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn registry(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    /// Fresh session, with the configured form type already selected.
    ///
    /// An unknown preselection is not fatal; it shows up as an error notice.
    #[must_use]
    pub fn start_session(&self) -> FormSession {
        let mut session = FormSession::new(self.registry(), self.clock);
        if let Some(form_type) = &self.initial_form {
            tracing::info!(form_type = %form_type, "preselecting form type");
            let _ = session.apply(FormIntent::select(form_type.clone()));
        }
        session
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
