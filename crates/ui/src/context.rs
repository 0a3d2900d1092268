use std::sync::{Arc, Mutex};

use services::{
    AppServices, AuthService, CatalogService, Clock, ContentManagerService, ExamLoopService,
    ResultService,
};

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn clock(&self) -> Clock;

    /// Path to open once the window is up, e.g. `/tests/reading`.
    fn start_route(&self) -> Option<String> {
        None
    }

    fn catalog(&self) -> Arc<CatalogService>;
    fn results(&self) -> Arc<ResultService>;
    fn auth(&self) -> Arc<AuthService>;
    fn content(&self) -> Arc<ContentManagerService>;
    fn exams(&self) -> Arc<ExamLoopService>;
}

impl UiApp for AppServices {
    fn app_name(&self) -> &str {
        "IELTS Practice"
    }

    fn clock(&self) -> Clock {
        AppServices::clock(self)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        AppServices::catalog(self)
    }

    fn results(&self) -> Arc<ResultService> {
        AppServices::results(self)
    }

    fn auth(&self) -> Arc<AuthService> {
        AppServices::auth(self)
    }

    fn content(&self) -> Arc<ContentManagerService> {
        AppServices::content(self)
    }

    fn exams(&self) -> Arc<ExamLoopService> {
        AppServices::exams(self)
    }
}

/// Services shared with every view through Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    start_route_once: Arc<Mutex<Option<String>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        let start_route = app.start_route().filter(|path| path != "/");
        Self {
            app,
            start_route_once: Arc::new(Mutex::new(start_route)),
        }
    }

    /// The configured start route; `None` after the first call.
    #[must_use]
    pub fn take_start_route(&self) -> Option<String> {
        self.start_route_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }

    #[must_use]
    pub fn app(&self) -> &dyn UiApp {
        self.app.as_ref()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.app.clock()
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        self.app.catalog()
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        self.app.results()
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        self.app.auth()
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentManagerService> {
        self.app.content()
    }

    #[must_use]
    pub fn exams(&self) -> Arc<ExamLoopService> {
        self.app.exams()
    }
}

// Provided by the composition root (`crates/app`) via `LaunchBuilder::with_context`.

#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
