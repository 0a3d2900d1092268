use chrono::{DateTime, Utc};
use ielts_core::highlight::HighlightColor;
use ielts_core::model::{
    AnswerValue, Question, QuestionId, QuestionType, Test, TestId, TestSkill, WritingTaskKind,
};
use ielts_core::progress::word_target_percent;
use services::{ExamError, ExamLoopService, ExamSession, SubmitDialog};
use tracing::debug;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamHeaderVm {
    pub title: String,
    pub skill_label: &'static str,
    pub timer_label: String,
    pub timer_class: &'static str,
    pub progress_pct: u32,
    pub progress_class: &'static str,
    pub progress_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTabVm {
    pub index: usize,
    pub title: String,
    pub active: bool,
    pub complete: bool,
}

/// How a question collects its answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerInput {
    /// One of several choices (radio buttons).
    Single { choices: Vec<String>, selected: Option<String> },
    /// One text entry per option; the answer list is indexed like the options.
    Slots { labels: Vec<String>, values: Vec<String> },
    Text { value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub number: usize,
    pub text: String,
    pub marks_label: Option<String>,
    /// Options listed beside a free-text answer, e.g. pairs to match.
    pub reference_options: Vec<String>,
    pub input: AnswerInput,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WritingTaskVm {
    pub kind: WritingTaskKind,
    pub label: &'static str,
    pub question: String,
    pub image_url: Option<String>,
    pub response: String,
    pub word_count_label: String,
    pub status_label: &'static str,
    pub target_pct: u32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExamOutcome {
    Continue,
    /// The exam is finished; navigate to `route`.
    Submitted { route: String },
}

/// Owns one running exam for the exam view.
#[derive(Debug)]
pub struct ExamVm {
    session: ExamSession,
}

impl ExamVm {
    #[must_use]
    pub fn new(session: ExamSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Whether this session runs the test at `skill`/`test_id`.
    #[must_use]
    pub fn belongs_to(&self, skill: TestSkill, test_id: &TestId) -> bool {
        self.session.skill() == skill && self.session.test().id() == test_id
    }

    #[must_use]
    pub fn header(&self) -> ExamHeaderVm {
        let timer = self.session.timer();
        let progress = self.session.progress();
        ExamHeaderVm {
            title: self.session.test().title().to_string(),
            skill_label: self.session.skill().label(),
            timer_label: timer.formatted(),
            timer_class: timer.urgency().css_class(),
            progress_pct: progress.rounded(),
            progress_class: progress.band.css_class(),
            progress_label: format!("{}/{} answered", progress.answered, progress.total),
        }
    }

    #[must_use]
    pub fn section_tabs(&self) -> Vec<SectionTabVm> {
        let active = self.session.navigator().index();
        self.session
            .test()
            .sections()
            .iter()
            .enumerate()
            .map(|(index, section)| SectionTabVm {
                index,
                title: section.title.clone(),
                active: index == active,
                complete: self.session.section_complete(index),
            })
            .collect()
    }

    #[must_use]
    pub fn section_description(&self) -> Option<String> {
        self.session
            .current_section()
            .and_then(|section| section.description.clone())
    }

    /// Questions of the current section, numbered across the whole test.
    #[must_use]
    pub fn current_questions(&self) -> Vec<QuestionVm> {
        let test = self.session.test();
        let active = self.session.navigator().index();
        let offset: usize = test
            .sections()
            .iter()
            .take(active)
            .map(|section| section.questions.len())
            .sum();
        self.session
            .current_section()
            .map(|section| {
                section
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(i, question)| self.question_vm(question, offset + i + 1))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn question_vm(&self, question: &Question, number: usize) -> QuestionVm {
        let answer = self.session.answer(&question.id);
        let options = question.options.clone().unwrap_or_default();
        let mut reference_options = Vec::new();
        let input = if let Some(choices) = question.kind.judgement_choices() {
            AnswerInput::Single {
                choices: choices.iter().map(ToString::to_string).collect(),
                selected: answer.and_then(AnswerValue::as_text).map(str::to_owned),
            }
        } else if question.kind.expects_list() && !options.is_empty() {
            let mut values = answer
                .and_then(AnswerValue::as_list)
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            values.resize(options.len(), String::new());
            AnswerInput::Slots {
                labels: options,
                values,
            }
        } else if question.kind == QuestionType::MultipleChoice && !options.is_empty() {
            AnswerInput::Single {
                choices: options,
                selected: answer.and_then(AnswerValue::as_text).map(str::to_owned),
            }
        } else {
            reference_options = options;
            AnswerInput::Text {
                value: answer.map(ToString::to_string).unwrap_or_default(),
            }
        };
        QuestionVm {
            id: question.id.clone(),
            number,
            text: question.text.clone(),
            marks_label: (question.marks > 1).then(|| format!("{} marks", question.marks)),
            reference_options,
            input,
        }
    }

    /// Sets a single-value answer; blank clears it.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session rejects the answer.
    pub fn set_text_answer(&mut self, id: &QuestionId, value: String) -> Result<(), ViewError> {
        self.session.set_answer(id, value).map_err(map_exam_error)
    }

    /// Writes the entry for option `slot` of a slotted answer. Other slots
    /// keep their positions; all-blank clears the answer.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for an unknown question, a slot past the
    /// last option, or if the session rejects the answer.
    pub fn set_slot_answer(
        &mut self,
        id: &QuestionId,
        slot: usize,
        value: String,
    ) -> Result<(), ViewError> {
        let Some(question) = self.session.test().find_question(id) else {
            return Err(ViewError::Unknown);
        };
        let slots = question.options.as_ref().map_or(0, Vec::len);
        if slot >= slots {
            return Err(ViewError::Unknown);
        }
        let mut values: Vec<String> = self
            .session
            .answer(id)
            .and_then(AnswerValue::as_list)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        values.resize(slots.max(values.len()), String::new());
        values[slot] = value;
        self.session
            .set_answer(id, AnswerValue::List(values))
            .map_err(map_exam_error)
    }

    pub fn next_section(&mut self) -> bool {
        self.session.next_section()
    }

    pub fn prev_section(&mut self) -> bool {
        self.session.prev_section()
    }

    pub fn go_to_section(&mut self, index: usize) -> bool {
        self.session.go_to_section(index)
    }

    #[must_use]
    pub fn is_first_section(&self) -> bool {
        self.session.navigator().is_first()
    }

    #[must_use]
    pub fn is_last_section(&self) -> bool {
        self.session.navigator().is_last()
    }

    /// Advances timers; reports a time-up submission.
    pub fn tick(&mut self, now: DateTime<Utc>) -> ExamOutcome {
        let tick = self.session.tick(now);
        match tick.auto_submitted {
            Some(receipt) => ExamOutcome::Submitted {
                route: receipt.route,
            },
            None => ExamOutcome::Continue,
        }
    }

    //
    // ─── READING ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn armed_color(&self) -> Option<HighlightColor> {
        self.session.highlighter().and_then(|h| h.armed())
    }

    #[must_use]
    pub fn highlight_count(&self) -> usize {
        self.session.highlighter().map_or(0, |h| h.highlights().len())
    }

    pub fn toggle_color(&mut self, color: HighlightColor) {
        let _ = self.session.toggle_highlight_color(color);
    }

    pub fn highlight_selection(&mut self, selection: &str) {
        if let Ok(Some(id)) = self.session.highlight_selection(selection) {
            debug!(%id, "highlight added from selection");
        }
    }

    pub fn clear_highlights(&mut self) {
        let _ = self.session.clear_highlights();
    }

    /// Unsanitized passage markup; `None` for non-reading tests.
    #[must_use]
    pub fn passage_html(&self) -> Option<String> {
        self.session.passage_html().ok()
    }

    #[must_use]
    pub fn audio_url(&self) -> Option<String> {
        match self.session.test() {
            Test::Listening(listening) => Some(listening.audio_url.clone()),
            _ => None,
        }
    }

    //
    // ─── WRITING ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn writing_tasks(&self) -> Vec<WritingTaskVm> {
        let Test::Writing(writing) = self.session.test() else {
            return Vec::new();
        };
        let current = self.session.navigator().current_task();
        writing
            .tasks()
            .iter()
            .map(|task| {
                let words = self.session.word_count(task.kind);
                let pct = word_target_percent(words, task.word_count);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let target_pct = pct.round() as u32;
                WritingTaskVm {
                    kind: task.kind,
                    label: task.kind.label(),
                    question: task.question.clone(),
                    image_url: task.image_url.clone(),
                    response: self.session.task_response(task.kind).to_string(),
                    word_count_label: format!(
                        "{words} words (minimum {} words)",
                        task.word_count
                    ),
                    status_label: self
                        .session
                        .word_status(task.kind)
                        .map_or("", |status| status.label()),
                    target_pct,
                    active: current == Some(task.kind),
                }
            })
            .collect()
    }

    pub fn go_to_task(&mut self, task: WritingTaskKind) -> bool {
        self.session.go_to_task(task)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session rejects the text.
    pub fn write_task(
        &mut self,
        task: WritingTaskKind,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ViewError> {
        self.session
            .write_task(task, text, now)
            .map(|_| ())
            .map_err(map_exam_error)
    }

    #[must_use]
    pub fn autosave_label(&self) -> Option<&'static str> {
        self.session.autosave_status().label()
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn pending_dialog(&self) -> Option<SubmitDialog> {
        self.session.pending_dialog()
    }

    pub fn open_submit_dialog(&mut self) {
        let _ = self.session.open_submit_dialog();
    }

    pub fn cancel_submit(&mut self) {
        self.session.cancel_submit();
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` unless the dialog is open.
    pub fn confirm_submit(&mut self, now: DateTime<Utc>) -> Result<ExamOutcome, ViewError> {
        let receipt = self.session.confirm_submit(now).map_err(map_exam_error)?;
        Ok(ExamOutcome::Submitted {
            route: receipt.route,
        })
    }
}

fn map_exam_error(err: ExamError) -> ViewError {
    match err {
        ExamError::NotFound { .. } => ViewError::NotFound,
        _ => ViewError::Unknown,
    }
}

/// # Errors
///
/// Returns `ViewError::NotFound` for unknown or mismatched tests.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_exam(
    exams: &ExamLoopService,
    skill: TestSkill,
    test_id: &TestId,
) -> Result<ExamVm, ViewError> {
    let session = exams
        .start_exam(skill, test_id)
        .await
        .map_err(map_exam_error)?;
    Ok(ExamVm::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ielts_core::time::fixed_now;
    use storage::fixtures::mock_tests;

    fn vm(id: &str) -> ExamVm {
        let test = mock_tests()
            .into_iter()
            .find(|t| t.id().as_str() == id)
            .unwrap();
        ExamVm::new(ExamSession::start(test, fixed_now()))
    }

    #[test]
    fn header_shows_full_time_and_zero_progress() {
        let header = vm("listening-test-1").header();
        assert_eq!(header.timer_label, "40:00");
        assert_eq!(header.progress_label, "0/5 answered");
        assert_eq!(header.progress_class, "progress-low");
    }

    #[test]
    fn session_belongs_only_to_its_own_route() {
        let exam = vm("reading-test-1");
        assert!(exam.belongs_to(TestSkill::Reading, &TestId::new("reading-test-1")));
        assert!(!exam.belongs_to(TestSkill::Reading, &TestId::new("reading-test-99")));
        assert!(!exam.belongs_to(TestSkill::Writing, &TestId::new("reading-test-1")));
    }

    #[test]
    fn questions_are_numbered_across_sections() {
        let mut exam = vm("listening-test-1");
        assert!(exam.next_section());
        let numbers: Vec<usize> = exam.current_questions().iter().map(|q| q.number).collect();
        assert_eq!(numbers, [4, 5]);
    }

    #[test]
    fn inputs_follow_question_type() {
        let exam = vm("listening-test-1");
        let questions = exam.current_questions();
        assert!(matches!(questions[0].input, AnswerInput::Single { ref choices, .. } if choices.len() == 4));
        assert!(matches!(questions[1].input, AnswerInput::Text { .. }));
        assert!(matches!(
            questions[2].input,
            AnswerInput::Single { ref choices, .. } if choices[2] == "not given"
        ));
    }

    #[test]
    fn matching_pairs_are_one_text_answer() {
        let mut test = mock_tests()
            .into_iter()
            .find(|t| t.id().as_str() == "reading-test-1")
            .unwrap();
        test.sections_mut().unwrap()[1].questions.push(
            Question::new(
                "q5",
                QuestionType::Matching,
                "Match each drink with its origin.",
                AnswerValue::text("A-2, B-1"),
            )
            .with_options(["A. Matcha", "B. Chai", "1. India", "2. Japan"]),
        );
        let mut exam = ExamVm::new(ExamSession::start(test, fixed_now()));
        exam.next_section();

        let question = &exam.current_questions()[1];
        assert!(matches!(question.input, AnswerInput::Text { .. }));
        assert_eq!(question.reference_options.len(), 4);

        let q5 = QuestionId::new("q5");
        exam.set_text_answer(&q5, "A-2, B-1".to_string()).unwrap();
        assert_eq!(exam.session().answer(&q5), Some(&AnswerValue::text("A-2, B-1")));
    }

    #[test]
    fn heading_slots_keep_their_positions() {
        let mut exam = vm("reading-test-1");
        exam.next_section();
        let q4 = QuestionId::new("q4");
        match &exam.current_questions()[0].input {
            AnswerInput::Slots { labels, values } => {
                assert_eq!(labels[0], "A. 6th century");
                assert_eq!(values.len(), 4);
                assert!(values.iter().all(String::is_empty));
            }
            other => panic!("expected slots, got {other:?}"),
        }

        exam.set_slot_answer(&q4, 1, "Japan".to_string()).unwrap();
        exam.set_slot_answer(&q4, 0, "Europe".to_string()).unwrap();
        let Some(AnswerValue::List(values)) = exam.session().answer(&q4).cloned() else {
            panic!("list answer expected");
        };
        assert_eq!(values, ["Europe", "Japan", "", ""]);
        assert!(matches!(
            &exam.current_questions()[0].input,
            AnswerInput::Slots { values, .. } if values[1] == "Japan"
        ));

        assert!(exam.set_slot_answer(&q4, 4, "x".to_string()).is_err());

        exam.set_slot_answer(&q4, 0, String::new()).unwrap();
        exam.set_slot_answer(&q4, 1, "  ".to_string()).unwrap();
        assert!(exam.session().answer(&q4).is_none());
    }

    #[test]
    fn writing_tasks_report_word_counts() {
        let mut exam = vm("writing-test-1");
        exam.write_task(WritingTaskKind::Task1, "one two three", fixed_now())
            .unwrap();
        let tasks = exam.writing_tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].word_count_label, "3 words (minimum 150 words)");
        assert_eq!(tasks[0].status_label, "Too few words");
        assert!(tasks[0].active);
        assert_eq!(tasks[1].target_pct, 0);
    }

    #[test]
    fn confirm_returns_result_route() {
        let mut exam = vm("reading-test-1");
        assert!(exam.confirm_submit(fixed_now()).is_err());
        exam.open_submit_dialog();
        let ExamOutcome::Submitted { route } = exam.confirm_submit(fixed_now()).unwrap() else {
            panic!("submitted outcome expected");
        };
        assert!(route.starts_with("/tests/results/reading/reading-result-"));
    }
}
