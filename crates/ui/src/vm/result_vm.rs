use ielts_core::model::{
    AnswerValue, FeedbackItem, QuestionResult, SectionScore, Test, TestId, TestResult, TestSkill,
    WritingTaskResult,
};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultHeaderVm {
    pub title: String,
    pub skill_label: &'static str,
    pub score_label: String,
    pub completed_label: String,
    pub time_spent: String,
    /// `28/40 correct`; absent for writing.
    pub correct_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionScoreVm {
    pub title: String,
    pub score_label: String,
    pub percent: u32,
}

impl From<&SectionScore> for SectionScoreVm {
    fn from(score: &SectionScore) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = score.percentage().round() as u32;
        Self {
            title: score.section.clone(),
            score_label: format!("{}/{}", score.score, score.total),
            percent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub title: String,
    pub description: String,
    pub score_label: Option<String>,
    pub suggestions: Vec<String>,
}

impl From<&FeedbackItem> for FeedbackVm {
    fn from(item: &FeedbackItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            score_label: item.score.map(|score| score.to_string()),
            suggestions: item.suggestions.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionReviewVm {
    pub number: usize,
    pub text: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewGroupVm {
    pub title: String,
    pub summary: String,
    pub questions: Vec<QuestionReviewVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriterionVm {
    pub name: String,
    pub score_label: String,
    pub feedback: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WritingTaskReviewVm {
    pub label: &'static str,
    pub question: String,
    pub answer: String,
    pub word_count_label: String,
    pub score_label: String,
    pub criteria: Vec<CriterionVm>,
}

impl From<&WritingTaskResult> for WritingTaskReviewVm {
    fn from(task: &WritingTaskResult) -> Self {
        Self {
            label: task.kind.label(),
            question: task.question.clone(),
            answer: task.user_answer.clone(),
            word_count_label: format!("{} words", task.word_count),
            score_label: task.score.to_string(),
            criteria: task
                .criteria
                .iter()
                .map(|c| CriterionVm {
                    name: c.name.clone(),
                    score_label: c.score.to_string(),
                    feedback: c.feedback.clone(),
                })
                .collect(),
        }
    }
}

/// Everything the results page renders for one stored result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub header: ResultHeaderVm,
    pub section_scores: Vec<SectionScoreVm>,
    pub review: Vec<ReviewGroupVm>,
    pub writing_tasks: Vec<WritingTaskReviewVm>,
    pub feedback: Vec<FeedbackVm>,
    /// Improvement strategies (listening) or points (writing).
    pub tips: Vec<String>,
    pub sample_improvement: Option<String>,
}

impl From<&TestResult> for ResultVm {
    fn from(result: &TestResult) -> Self {
        let summary = result.summary();
        let header = ResultHeaderVm {
            title: summary.test_title.clone(),
            skill_label: result.skill().label(),
            score_label: summary.score.to_string(),
            completed_label: format_date(summary.completed_at),
            time_spent: summary.time_spent.clone(),
            correct_label: result
                .correct_ratio()
                .map(|(correct, total)| format!("{correct}/{total} correct")),
        };
        let feedback = result.ai_feedback().iter().map(FeedbackVm::from).collect();

        let mut vm = Self {
            header,
            section_scores: Vec::new(),
            review: Vec::new(),
            writing_tasks: Vec::new(),
            feedback,
            tips: Vec::new(),
            sample_improvement: None,
        };
        match result {
            TestResult::Reading(r) => {
                vm.section_scores = r.section_scores.iter().map(SectionScoreVm::from).collect();
                vm.review = review_groups(&r.question_review);
            }
            TestResult::Listening(r) => {
                vm.section_scores = r.section_scores.iter().map(SectionScoreVm::from).collect();
                vm.review = review_groups(&r.question_review);
                vm.tips = r
                    .improvement_strategies
                    .iter()
                    .map(|s| format!("{}: {}", s.title, s.description))
                    .collect();
            }
            TestResult::Writing(r) => {
                vm.writing_tasks = r.writing_tasks.iter().map(WritingTaskReviewVm::from).collect();
                vm.tips = r.improvement_points.clone();
                vm.sample_improvement = Some(r.sample_improvement.clone());
            }
        }
        vm
    }
}

/// Link to a neighbouring test of the same skill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestLinkVm {
    pub skill: TestSkill,
    pub id: TestId,
    pub title: String,
}

impl From<&Test> for TestLinkVm {
    fn from(test: &Test) -> Self {
        Self {
            skill: test.skill(),
            id: test.id().clone(),
            title: test.title().to_string(),
        }
    }
}

/// Retake link plus the previous and next tests in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultNavVm {
    pub retake_id: TestId,
    pub previous: Option<TestLinkVm>,
    pub next: Option<TestLinkVm>,
}

impl ResultNavVm {
    #[must_use]
    pub fn new(result: &TestResult, previous: Option<&Test>, next: Option<&Test>) -> Self {
        Self {
            retake_id: result.summary().test_id.clone(),
            previous: previous.map(TestLinkVm::from),
            next: next.map(TestLinkVm::from),
        }
    }
}

fn review_groups(groups: &[ielts_core::model::SectionQuestions]) -> Vec<ReviewGroupVm> {
    let mut number = 0;
    groups
        .iter()
        .map(|group| ReviewGroupVm {
            title: group.title.clone(),
            summary: format!("{}/{} correct", group.correct_count(), group.questions.len()),
            questions: group
                .questions
                .iter()
                .map(|q| {
                    number += 1;
                    question_review(q, number)
                })
                .collect(),
        })
        .collect()
}

fn question_review(question: &QuestionResult, number: usize) -> QuestionReviewVm {
    QuestionReviewVm {
        number,
        text: question.text.clone(),
        user_answer: answer_label(&question.user_answer),
        correct_answer: answer_label(&question.correct_answer),
        explanation: question.explanation.clone(),
        is_correct: question.is_correct,
    }
}

fn answer_label(answer: &AnswerValue) -> String {
    if answer.is_blank() {
        "(no answer)".to_string()
    } else {
        answer.to_string()
    }
}
