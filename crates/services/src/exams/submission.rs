use chrono::{DateTime, Utc};
use ielts_core::model::{ResultId, TestId, TestSkill};
use uuid::Uuid;

pub const SUBMIT_WARNING: &str =
    "Are you sure you want to submit? You will not be able to go back after you have submitted.";
pub const CONFIRM_LABEL: &str = "Confirm submit";

/// Contents of the confirmation dialog shown before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitDialog {
    pub answered: usize,
    pub total: usize,
}

impl SubmitDialog {
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "You have answered {} questions on total {} questions.",
            self.answered, self.total
        )
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        SUBMIT_WARNING
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReason {
    Confirmed,
    TimeUp,
}

/// What the session hands back once it is finished.
///
/// `result_id` is freshly generated and unrelated to the answers; no result
/// is stored under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub result_id: ResultId,
    pub skill: TestSkill,
    pub test_id: TestId,
    pub route: String,
    pub submitted_at: DateTime<Utc>,
    pub answered: usize,
    pub total: usize,
    pub reason: SubmitReason,
}

impl SubmissionReceipt {
    pub(crate) fn issue(
        skill: TestSkill,
        test_id: TestId,
        submitted_at: DateTime<Utc>,
        dialog: SubmitDialog,
        reason: SubmitReason,
    ) -> Self {
        let result_id = new_result_id(skill);
        Self {
            route: result_route(skill, &result_id),
            result_id,
            skill,
            test_id,
            submitted_at,
            answered: dialog.answered,
            total: dialog.total,
            reason,
        }
    }
}

#[must_use]
pub fn new_result_id(skill: TestSkill) -> ResultId {
    ResultId::new(format!("{}-result-{}", skill.as_str(), Uuid::new_v4()))
}

#[must_use]
pub fn result_route(skill: TestSkill, id: &ResultId) -> String {
    format!("/tests/results/{}/{}", skill.as_str(), id)
}
