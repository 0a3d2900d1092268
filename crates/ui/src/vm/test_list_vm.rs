use ielts_core::model::{Test, TestId, TestSkill};

use crate::vm::time_fmt::{format_date, format_minutes};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCardVm {
    pub id: TestId,
    pub skill: TestSkill,
    pub title: String,
    pub difficulty_label: &'static str,
    pub duration_label: String,
    pub description: String,
    pub questions_label: String,
    pub created_label: String,
}

impl From<&Test> for TestCardVm {
    fn from(test: &Test) -> Self {
        let meta = test.meta();
        let questions_label = match test.skill() {
            TestSkill::Writing => "2 tasks".to_string(),
            _ => format!(
                "{} questions in {} sections",
                test.total_question_count(),
                test.sections().len()
            ),
        };
        Self {
            id: test.id().clone(),
            skill: test.skill(),
            title: meta.title.clone(),
            difficulty_label: meta.difficulty.label(),
            duration_label: format_minutes(meta.duration),
            description: meta.description.clone().unwrap_or_default(),
            questions_label,
            created_label: format_date(meta.created_at),
        }
    }
}

#[must_use]
pub fn map_test_cards(tests: &[Test]) -> Vec<TestCardVm> {
    tests.iter().map(TestCardVm::from).collect()
}

#[must_use]
pub fn skill_heading(skill: TestSkill) -> String {
    format!("IELTS {} Tests", skill.label())
}
