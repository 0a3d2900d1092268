use std::sync::Arc;

use ielts_core::model::{Test, TestId, TestSkill};
use storage::TestRepository;
use tracing::debug;

use crate::error::CatalogError;
use crate::filters::TestFilters;

/// Read side of the practice test catalog.
#[derive(Clone)]
pub struct CatalogService {
    tests: Arc<dyn TestRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(tests: Arc<dyn TestRepository>) -> Self {
        Self { tests }
    }

    /// Fetch a test by ID; `Ok(None)` when it is not in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn get_test(&self, id: &TestId) -> Result<Option<Test>, CatalogError> {
        let test = self.tests.get_test(id).await?;
        if test.is_none() {
            debug!(test_id = %id, "test not in catalog");
        }
        Ok(test)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn all_tests(&self) -> Result<Vec<Test>, CatalogError> {
        Ok(self.tests.list_tests().await?)
    }

    /// Catalog-ordered tests for one skill.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn tests_by_skill(&self, skill: TestSkill) -> Result<Vec<Test>, CatalogError> {
        Ok(self.tests.list_tests_by_skill(skill).await?)
    }

    /// The test after `id` within the same skill, in catalog order.
    ///
    /// `None` for the last test or an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn next_test(&self, id: &TestId) -> Result<Option<Test>, CatalogError> {
        self.neighbour(id, 1).await
    }

    /// The test before `id` within the same skill, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn previous_test(&self, id: &TestId) -> Result<Option<Test>, CatalogError> {
        self.neighbour(id, -1).await
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn filter_tests(&self, filters: &TestFilters) -> Result<Vec<Test>, CatalogError> {
        let tests = self.tests.list_tests().await?;
        Ok(filters.apply(tests))
    }

    async fn neighbour(&self, id: &TestId, step: isize) -> Result<Option<Test>, CatalogError> {
        let Some(current) = self.tests.get_test(id).await? else {
            debug!(test_id = %id, "no neighbour for unknown test");
            return Ok(None);
        };
        let mut siblings = self.tests.list_tests_by_skill(current.skill()).await?;
        let Some(pos) = siblings.iter().position(|t| t.id() == id) else {
            return Ok(None);
        };
        let Some(target) = pos.checked_add_signed(step) else {
            return Ok(None);
        };
        if target >= siblings.len() {
            return Ok(None);
        }
        Ok(Some(siblings.swap_remove(target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryRepository;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryRepository::seeded()))
    }

    #[tokio::test]
    async fn unknown_test_is_none() {
        let found = service().get_test(&TestId::new("reading-test-9")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn tests_by_skill_keeps_catalog_order() {
        let listening = service().tests_by_skill(TestSkill::Listening).await.unwrap();
        let ids: Vec<&str> = listening.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, ["listening-test-1", "listening-test-2"]);
    }

    #[tokio::test]
    async fn next_and_previous_stay_within_skill() {
        let svc = service();
        let next = svc.next_test(&TestId::new("reading-test-1")).await.unwrap();
        assert_eq!(next.unwrap().id().as_str(), "reading-test-2");

        let after_last = svc.next_test(&TestId::new("reading-test-2")).await.unwrap();
        assert!(after_last.is_none());

        let before_first = svc.previous_test(&TestId::new("writing-test-1")).await.unwrap();
        assert!(before_first.is_none());

        let prev = svc.previous_test(&TestId::new("writing-test-2")).await.unwrap();
        assert_eq!(prev.unwrap().id().as_str(), "writing-test-1");
    }

    #[tokio::test]
    async fn neighbour_of_unknown_id_is_none() {
        let next = service().next_test(&TestId::new("nope")).await.unwrap();
        assert!(next.is_none());
    }
}
