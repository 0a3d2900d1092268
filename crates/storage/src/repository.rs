use async_trait::async_trait;
use ielts_core::model::{ResultId, Test, TestId, TestResult, TestSkill};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use crate::fixtures;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    /// A writer panicked while holding the store's lock.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Practice test catalog. Listing order is insertion order.
#[async_trait]
pub trait TestRepository: Send + Sync {
    /// Fetch a test by ID; `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_test(&self, id: &TestId) -> Result<Option<Test>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_tests(&self) -> Result<Vec<Test>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_tests_by_skill(&self, skill: TestSkill) -> Result<Vec<Test>, StorageError>;

    /// Insert a new test at the end of the catalog, or replace one in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the test cannot be stored.
    async fn upsert_test(&self, test: &Test) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete_test(&self, id: &TestId) -> Result<(), StorageError>;
}

/// Read-only access to the canned results.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_result(&self, id: &ResultId) -> Result<Option<TestResult>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_results(&self) -> Result<Vec<TestResult>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_results_by_skill(&self, skill: TestSkill)
    -> Result<Vec<TestResult>, StorageError>;
}

/// String key/value store standing in for browser local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local repository. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    tests: Arc<Mutex<Vec<Test>>>,
    results: Arc<Mutex<Vec<TestResult>>>,
    items: Arc<Mutex<HashMap<String, String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Unavailable(e.to_string()))
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with the mock catalog and canned results.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_data(fixtures::mock_tests(), fixtures::mock_results())
    }

    #[must_use]
    pub fn with_data(tests: Vec<Test>, results: Vec<TestResult>) -> Self {
        Self {
            tests: Arc::new(Mutex::new(tests)),
            results: Arc::new(Mutex::new(results)),
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TestRepository for InMemoryRepository {
    async fn get_test(&self, id: &TestId) -> Result<Option<Test>, StorageError> {
        let guard = lock(&self.tests)?;
        Ok(guard.iter().find(|t| t.id() == id).cloned())
    }

    async fn list_tests(&self) -> Result<Vec<Test>, StorageError> {
        Ok(lock(&self.tests)?.clone())
    }

    async fn list_tests_by_skill(&self, skill: TestSkill) -> Result<Vec<Test>, StorageError> {
        let guard = lock(&self.tests)?;
        Ok(guard.iter().filter(|t| t.skill() == skill).cloned().collect())
    }

    async fn upsert_test(&self, test: &Test) -> Result<(), StorageError> {
        let mut guard = lock(&self.tests)?;
        match guard.iter_mut().find(|t| t.id() == test.id()) {
            Some(slot) => *slot = test.clone(),
            None => guard.push(test.clone()),
        }
        Ok(())
    }

    async fn delete_test(&self, id: &TestId) -> Result<(), StorageError> {
        let mut guard = lock(&self.tests)?;
        let pos = guard
            .iter()
            .position(|t| t.id() == id)
            .ok_or(StorageError::NotFound)?;
        guard.remove(pos);
        Ok(())
    }
}

#[async_trait]
impl ResultRepository for InMemoryRepository {
    async fn get_result(&self, id: &ResultId) -> Result<Option<TestResult>, StorageError> {
        let guard = lock(&self.results)?;
        Ok(guard.iter().find(|r| r.id() == id).cloned())
    }

    async fn list_results(&self) -> Result<Vec<TestResult>, StorageError> {
        Ok(lock(&self.results)?.clone())
    }

    async fn list_results_by_skill(
        &self,
        skill: TestSkill,
    ) -> Result<Vec<TestResult>, StorageError> {
        let guard = lock(&self.results)?;
        Ok(guard.iter().filter(|r| r.skill() == skill).cloned().collect())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(lock(&self.items)?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock(&self.items)?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        lock(&self.items)?.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub tests: Arc<dyn TestRepository>,
    pub results: Arc<dyn ResultRepository>,
    pub local: Arc<dyn KeyValueStore>,
}

impl Storage {
    /// Empty catalog, empty results.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// Mock catalog and canned results.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_repository(InMemoryRepository::seeded())
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let tests: Arc<dyn TestRepository> = Arc::new(repo.clone());
        let results: Arc<dyn ResultRepository> = Arc::new(repo.clone());
        let local: Arc<dyn KeyValueStore> = Arc::new(repo);
        Self {
            tests,
            results,
            local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_keeps_fixture_order() {
        let repo = InMemoryRepository::seeded();
        let ids: Vec<String> = repo
            .list_tests()
            .await
            .unwrap()
            .iter()
            .map(|t| t.id().to_string())
            .collect();
        assert_eq!(
            ids,
            [
                "listening-test-1",
                "listening-test-2",
                "reading-test-1",
                "reading-test-2",
                "writing-test-1",
                "writing-test-2",
            ]
        );
    }

    #[tokio::test]
    async fn missing_test_is_none_not_error() {
        let repo = InMemoryRepository::seeded();
        let found = repo.get_test(&TestId::new("speaking-test-1")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_in_place() {
        let repo = InMemoryRepository::seeded();
        let mut test = repo
            .get_test(&TestId::new("reading-test-1"))
            .await
            .unwrap()
            .unwrap();
        test.meta_mut().title = "Renamed".into();
        repo.upsert_test(&test).await.unwrap();

        let all = repo.list_tests().await.unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[2].title(), "Renamed");
    }

    #[tokio::test]
    async fn poisoned_store_reports_unavailable() {
        let repo = InMemoryRepository::seeded();
        let tests = Arc::clone(&repo.tests);
        let _ = std::thread::spawn(move || {
            let _guard = tests.lock().unwrap();
            panic!("writer failed");
        })
        .join();

        let err = repo.list_tests().await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
    }

    #[tokio::test]
    async fn delete_missing_test_is_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.delete_test(&TestId::new("nope")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn results_filter_by_skill() {
        let repo = InMemoryRepository::seeded();
        let writing = repo.list_results_by_skill(TestSkill::Writing).await.unwrap();
        assert_eq!(writing.len(), 2);
        assert!(writing.iter().all(|r| r.skill() == TestSkill::Writing));
    }

    #[tokio::test]
    async fn key_value_round_trip() {
        let storage = Storage::in_memory();
        assert!(storage.local.get_item("user").await.unwrap().is_none());
        storage.local.set_item("user", "{}").await.unwrap();
        assert_eq!(storage.local.get_item("user").await.unwrap().as_deref(), Some("{}"));
        storage.local.remove_item("user").await.unwrap();
        storage.local.remove_item("user").await.unwrap();
        assert!(storage.local.get_item("user").await.unwrap().is_none());
    }
}
