use ielts_core::model::{Test, TestDifficulty, TestSkill};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TestSort {
    /// Catalog order.
    #[default]
    Catalog,
    Newest,
    Oldest,
    /// Case-insensitive by title.
    Alphabetical,
}

impl TestSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Alphabetical => "a-z",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "catalog" => Some(Self::Catalog),
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "a-z" => Some(Self::Alphabetical),
            _ => None,
        }
    }
}

/// Listing filters shared by the catalog and the content manager.
///
/// An empty `skills` list means every skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFilters {
    pub skills: Vec<TestSkill>,
    pub difficulty: Option<TestDifficulty>,
    pub search: Option<String>,
    pub sort: TestSort,
}

impl TestFilters {
    #[must_use]
    pub fn for_skill(skill: TestSkill) -> Self {
        Self {
            skills: vec![skill],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<TestDifficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: TestSort) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn matches(&self, test: &Test) -> bool {
        if !self.skills.is_empty() && !self.skills.contains(&test.skill()) {
            return false;
        }
        if let Some(difficulty) = self.difficulty
            && test.meta().difficulty != difficulty
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => test
                .title()
                .to_lowercase()
                .contains(&query.to_lowercase()),
            _ => true,
        }
    }

    /// Filters then sorts. Sorting is stable, so ties keep catalog order.
    #[must_use]
    pub fn apply(&self, tests: Vec<Test>) -> Vec<Test> {
        let mut kept: Vec<Test> = tests.into_iter().filter(|t| self.matches(t)).collect();
        match self.sort {
            TestSort::Catalog => {}
            TestSort::Newest => kept.sort_by(|a, b| b.meta().created_at.cmp(&a.meta().created_at)),
            TestSort::Oldest => kept.sort_by(|a, b| a.meta().created_at.cmp(&b.meta().created_at)),
            TestSort::Alphabetical => {
                kept.sort_by_cached_key(|t| t.title().to_lowercase());
            }
        }
        kept
    }
}
