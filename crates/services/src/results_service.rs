use std::sync::Arc;

use ielts_core::model::{ResultId, TestResult, TestSkill};
use storage::ResultRepository;
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Lookup of detailed results for the results page.
#[derive(Clone)]
pub struct ResultService {
    results: Arc<dyn ResultRepository>,
}

impl ResultService {
    #[must_use]
    pub fn new(results: Arc<dyn ResultRepository>) -> Self {
        Self { results }
    }

    /// Fetch a result by ID; `Ok(None)` when it is unknown.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn get_detailed_result(
        &self,
        id: &ResultId,
    ) -> Result<Option<TestResult>, CatalogError> {
        let result = self.results.get_result(id).await?;
        if result.is_none() {
            debug!(result_id = %id, "result not found");
        }
        Ok(result)
    }

    /// Like [`Self::get_detailed_result`], but a result of another skill is
    /// reported as missing.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn get_result_for_skill(
        &self,
        skill: TestSkill,
        id: &ResultId,
    ) -> Result<Option<TestResult>, CatalogError> {
        let Some(result) = self.get_detailed_result(id).await? else {
            return Ok(None);
        };
        if result.skill() != skill {
            warn!(result_id = %id, requested = %skill, actual = %result.skill(), "result skill mismatch");
            return Ok(None);
        }
        Ok(Some(result))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn results_by_skill(&self, skill: TestSkill) -> Result<Vec<TestResult>, CatalogError> {
        Ok(self.results.list_results_by_skill(skill).await?)
    }

    /// Results are not partitioned by user, so every stored result is returned.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn results_for_user(&self, email: &str) -> Result<Vec<TestResult>, CatalogError> {
        debug!(email, "listing results for user");
        Ok(self.results.list_results().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryRepository;

    fn service() -> ResultService {
        ResultService::new(Arc::new(InMemoryRepository::seeded()))
    }

    #[tokio::test]
    async fn finds_seeded_result() {
        let found = service()
            .get_detailed_result(&ResultId::new("reading-result-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.skill(), TestSkill::Reading);
    }

    #[tokio::test]
    async fn skill_mismatch_is_missing() {
        let found = service()
            .get_result_for_skill(TestSkill::Writing, &ResultId::new("reading-result-1"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn unknown_result_is_missing() {
        let found = service()
            .get_detailed_result(&ResultId::new("listening-result-42"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn user_results_are_everything() {
        let all = service().results_for_user("a@b.c").await.unwrap();
        assert_eq!(all.len(), 6);
    }
}
