use std::sync::Arc;

use ielts_core::model::{TestId, TestSkill};
use storage::TestRepository;
use tracing::warn;

use super::session::ExamSession;
use crate::Clock;
use crate::error::ExamError;

/// Loads tests and opens exam sessions against the shared clock.
#[derive(Clone)]
pub struct ExamLoopService {
    clock: Clock,
    tests: Arc<dyn TestRepository>,
}

impl ExamLoopService {
    #[must_use]
    pub fn new(clock: Clock, tests: Arc<dyn TestRepository>) -> Self {
        Self { clock, tests }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start an exam for `test_id`, which must be a `skill` test.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::NotFound` if the test is missing or of another skill.
    /// Returns `ExamError::Storage` if repository access fails.
    pub async fn start_exam(
        &self,
        skill: TestSkill,
        test_id: &TestId,
    ) -> Result<ExamSession, ExamError> {
        let not_found = || ExamError::NotFound {
            skill,
            id: test_id.clone(),
        };
        let Some(test) = self.tests.get_test(test_id).await? else {
            warn!(%skill, %test_id, "exam requested for unknown test");
            return Err(not_found());
        };
        if test.skill() != skill {
            warn!(%skill, %test_id, actual = %test.skill(), "exam requested under wrong skill");
            return Err(not_found());
        }
        Ok(ExamSession::start(test, self.clock.now()))
    }
}
