use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::auth_service::AuthService;
use crate::catalog_service::CatalogService;
use crate::content_service::ContentManagerService;
use crate::exams::ExamLoopService;
use crate::results_service::ResultService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    catalog: Arc<CatalogService>,
    results: Arc<ResultService>,
    auth: Arc<AuthService>,
    content: Arc<ContentManagerService>,
    exams: Arc<ExamLoopService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        Self {
            clock,
            catalog: Arc::new(CatalogService::new(Arc::clone(&storage.tests))),
            results: Arc::new(ResultService::new(Arc::clone(&storage.results))),
            auth: Arc::new(AuthService::new(Arc::clone(&storage.local))),
            content: Arc::new(ContentManagerService::new(clock, Arc::clone(&storage.tests))),
            exams: Arc::new(ExamLoopService::new(clock, Arc::clone(&storage.tests))),
        }
    }

    /// Services over the mock catalog and canned results.
    #[must_use]
    pub fn seeded(clock: Clock) -> Self {
        Self::new(&Storage::seeded(), clock)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentManagerService> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn exams(&self) -> Arc<ExamLoopService> {
        Arc::clone(&self.exams)
    }
}
