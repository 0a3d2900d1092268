use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::answer::AnswerValue;
use crate::model::ids::{QuestionId, SectionId, TaskId, TestId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestError {
    #[error("test title cannot be empty")]
    EmptyTitle,

    #[error("test duration must be > 0 minutes")]
    InvalidDuration,

    #[error("writing test needs exactly two tasks, got {0}")]
    WritingTaskCount(usize),

    #[error("writing tasks must be ordered task1 then task2")]
    WritingTaskOrder,

    #[error("writing task target word count must be > 0")]
    InvalidTargetWordCount,

    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),
}

//
// ─── SKILL / DIFFICULTY ────────────────────────────────────────────────────────
//

/// The IELTS skill a practice test exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestSkill {
    Listening,
    Reading,
    Writing,
}

impl TestSkill {
    pub const ALL: [TestSkill; 3] = [Self::Listening, Self::Reading, Self::Writing];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Listening => "listening",
            Self::Reading => "reading",
            Self::Writing => "writing",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Listening => "Listening",
            Self::Reading => "Reading",
            Self::Writing => "Writing",
        }
    }
}

impl fmt::Display for TestSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestSkill {
    type Err = TestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "listening" => Ok(Self::Listening),
            "reading" => Ok(Self::Reading),
            "writing" => Ok(Self::Writing),
            other => Err(TestError::UnknownSkill(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestDifficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl TestDifficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very_hard",
        }
    }

    /// Human label, e.g. `Very Hard`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
        }
    }
}

impl FromStr for TestDifficulty {
    type Err = TestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "very_hard" => Ok(Self::VeryHard),
            other => Err(TestError::UnknownDifficulty(other.to_owned())),
        }
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// Question formats used across the listening and reading papers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    FillInTheBlanks,
    TrueFalseNotGiven,
    YesNoNotGiven,
    MatchingHeadings,
    MatchingInformation,
    Matching,
    ShortAnswer,
    SummaryCompletion,
    SentenceCompletion,
}

impl QuestionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::FillInTheBlanks => "fill_in_the_blanks",
            Self::TrueFalseNotGiven => "true_false_not_given",
            Self::YesNoNotGiven => "yes_no_not_given",
            Self::MatchingHeadings => "matching_headings",
            Self::MatchingInformation => "matching_information",
            Self::Matching => "matching",
            Self::ShortAnswer => "short_answer",
            Self::SummaryCompletion => "summary_completion",
            Self::SentenceCompletion => "sentence_completion",
        }
    }

    /// Fixed choices for judgement questions, `None` for everything else.
    #[must_use]
    pub fn judgement_choices(self) -> Option<[&'static str; 3]> {
        match self {
            Self::TrueFalseNotGiven => Some(["true", "false", "not given"]),
            Self::YesNoNotGiven => Some(["yes", "no", "not given"]),
            _ => None,
        }
    }

    /// Whether answers to this type are a `List` with one entry per option.
    /// `Matching` takes its pairs as a single text answer.
    #[must_use]
    pub fn expects_list(self) -> bool {
        matches!(self, Self::MatchingHeadings | Self::MatchingInformation)
    }
}

impl FromStr for QuestionType {
    type Err = TestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "multiple_choice" => Self::MultipleChoice,
            "fill_in_the_blanks" => Self::FillInTheBlanks,
            "true_false_not_given" => Self::TrueFalseNotGiven,
            "yes_no_not_given" => Self::YesNoNotGiven,
            "matching_headings" => Self::MatchingHeadings,
            "matching_information" => Self::MatchingInformation,
            "matching" => Self::Matching,
            "short_answer" => Self::ShortAnswer,
            "summary_completion" => Self::SummaryCompletion,
            "sentence_completion" => Self::SentenceCompletion,
            other => return Err(TestError::UnknownQuestionType(other.to_owned())),
        };
        Ok(kind)
    }
}

/// A single listening or reading question. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionType,
    pub text: String,
    pub options: Option<Vec<String>>,
    pub correct_answer: AnswerValue,
    pub marks: u32,
}

impl Question {
    #[must_use]
    pub fn new(
        id: impl Into<QuestionId>,
        kind: QuestionType,
        text: impl Into<String>,
        correct_answer: AnswerValue,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            options: None,
            correct_answer,
            marks: 1,
        }
    }

    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_marks(mut self, marks: u32) -> Self {
        self.marks = marks;
        self
    }
}

/// An ordered group of questions; the unit of navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    #[must_use]
    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.marks).sum()
    }
}

//
// ─── WRITING ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingTaskKind {
    Task1,
    Task2,
}

impl WritingTaskKind {
    pub const ALL: [WritingTaskKind; 2] = [Self::Task1, Self::Task2];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Task1 => 0,
            Self::Task2 => 1,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Task1),
            1 => Some(Self::Task2),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Task1 => "Task 1",
            Self::Task2 => "Task 2",
        }
    }
}

/// Guidance text for the four IELTS writing criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkingCriteria {
    pub task_achievement: String,
    pub coherence_cohesion: String,
    pub lexical_resource: String,
    pub grammatical_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingTask {
    pub id: TaskId,
    pub kind: WritingTaskKind,
    pub question: String,
    /// Recommended minimum word count.
    pub word_count: u32,
    pub image_url: Option<String>,
    pub sample_answer: Option<String>,
    pub marking_criteria: MarkingCriteria,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

/// Fields shared by every practice test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestMeta {
    pub id: TestId,
    pub title: String,
    pub difficulty: TestDifficulty,
    /// Duration in minutes.
    pub duration: u32,
    pub description: Option<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl TestMeta {
    /// Validates title and duration.
    ///
    /// # Errors
    ///
    /// Returns `TestError::EmptyTitle` or `TestError::InvalidDuration`.
    pub fn validate(&self) -> Result<(), TestError> {
        if self.title.trim().is_empty() {
            return Err(TestError::EmptyTitle);
        }
        if self.duration == 0 {
            return Err(TestError::InvalidDuration);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListeningTest {
    pub meta: TestMeta,
    pub audio_url: String,
    /// Audio length in seconds.
    pub audio_length: u32,
    pub transcript: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingTest {
    pub meta: TestMeta,
    pub passage: String,
    pub sections: Vec<Section>,
}

/// A writing paper: always `task1` followed by `task2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingTest {
    pub meta: TestMeta,
    tasks: [WritingTask; 2],
}

impl WritingTest {
    /// Builds a writing test from exactly two tasks.
    ///
    /// # Errors
    ///
    /// Returns `TestError::WritingTaskCount` unless two tasks are given,
    /// `TestError::WritingTaskOrder` unless they are `task1` then `task2`,
    /// and `TestError::InvalidTargetWordCount` for a zero target.
    pub fn new(meta: TestMeta, tasks: Vec<WritingTask>) -> Result<Self, TestError> {
        let tasks: [WritingTask; 2] = tasks
            .try_into()
            .map_err(|rest: Vec<WritingTask>| TestError::WritingTaskCount(rest.len()))?;
        if tasks[0].kind != WritingTaskKind::Task1 || tasks[1].kind != WritingTaskKind::Task2 {
            return Err(TestError::WritingTaskOrder);
        }
        if tasks.iter().any(|task| task.word_count == 0) {
            return Err(TestError::InvalidTargetWordCount);
        }
        Ok(Self { meta, tasks })
    }

    /// Builds a writing test from a task pair; position decides the kind.
    #[must_use]
    pub fn from_pair(meta: TestMeta, mut task1: WritingTask, mut task2: WritingTask) -> Self {
        task1.kind = WritingTaskKind::Task1;
        task2.kind = WritingTaskKind::Task2;
        Self {
            meta,
            tasks: [task1, task2],
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[WritingTask; 2] {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, kind: WritingTaskKind) -> &WritingTask {
        &self.tasks[kind.index()]
    }
}

/// A practice test of any skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "skill", rename_all = "snake_case")]
pub enum Test {
    Listening(ListeningTest),
    Reading(ReadingTest),
    Writing(WritingTest),
}

impl Test {
    #[must_use]
    pub fn meta(&self) -> &TestMeta {
        match self {
            Self::Listening(test) => &test.meta,
            Self::Reading(test) => &test.meta,
            Self::Writing(test) => &test.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut TestMeta {
        match self {
            Self::Listening(test) => &mut test.meta,
            Self::Reading(test) => &mut test.meta,
            Self::Writing(test) => &mut test.meta,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TestId {
        &self.meta().id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.meta().title
    }

    #[must_use]
    pub fn skill(&self) -> TestSkill {
        match self {
            Self::Listening(_) => TestSkill::Listening,
            Self::Reading(_) => TestSkill::Reading,
            Self::Writing(_) => TestSkill::Writing,
        }
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u32 {
        self.meta().duration.saturating_mul(60)
    }

    /// Question sections; empty for writing tests.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        match self {
            Self::Listening(test) => &test.sections,
            Self::Reading(test) => &test.sections,
            Self::Writing(_) => &[],
        }
    }

    pub fn sections_mut(&mut self) -> Option<&mut Vec<Section>> {
        match self {
            Self::Listening(test) => Some(&mut test.sections),
            Self::Reading(test) => Some(&mut test.sections),
            Self::Writing(_) => None,
        }
    }

    /// Number of navigable units: sections, or the two writing tasks.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        match self {
            Self::Listening(test) => test.sections.len(),
            Self::Reading(test) => test.sections.len(),
            Self::Writing(test) => test.tasks().len(),
        }
    }

    /// Questions summed across all sections, or the number of writing tasks.
    #[must_use]
    pub fn total_question_count(&self) -> usize {
        match self {
            Self::Listening(_) | Self::Reading(_) => {
                self.sections().iter().map(|s| s.questions.len()).sum()
            }
            Self::Writing(test) => test.tasks().len(),
        }
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections().iter().flat_map(|s| s.questions.iter())
    }

    #[must_use]
    pub fn find_question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions().find(|q| &q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn meta(id: &str) -> TestMeta {
        TestMeta {
            id: TestId::new(id),
            title: "Practice".into(),
            difficulty: TestDifficulty::Medium,
            duration: 40,
            description: None,
            instructions: "Answer all questions.".into(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
            created_by: "admin-user".into(),
        }
    }

    fn criteria() -> MarkingCriteria {
        MarkingCriteria {
            task_achievement: "ta".into(),
            coherence_cohesion: "cc".into(),
            lexical_resource: "lr".into(),
            grammatical_range: "gr".into(),
        }
    }

    fn task(id: &str, kind: WritingTaskKind, words: u32) -> WritingTask {
        WritingTask {
            id: TaskId::new(id),
            kind,
            question: "Describe".into(),
            word_count: words,
            image_url: None,
            sample_answer: None,
            marking_criteria: criteria(),
        }
    }

    #[test]
    fn total_question_count_sums_sections() {
        let test = Test::Listening(ListeningTest {
            meta: meta("listening-test-1"),
            audio_url: "/audio/a.mp3".into(),
            audio_length: 1800,
            transcript: None,
            sections: vec![
                Section::new("section-1", "One").with_questions(vec![
                    Question::new("q1", QuestionType::MultipleChoice, "?", "A".into()),
                    Question::new("q2", QuestionType::FillInTheBlanks, "?", "800".into()),
                ]),
                Section::new("section-2", "Two").with_questions(vec![Question::new(
                    "q3",
                    QuestionType::ShortAnswer,
                    "?",
                    "June".into(),
                )]),
            ],
        });

        assert_eq!(test.total_question_count(), 3);
        assert_eq!(test.unit_count(), 2);
        assert_eq!(test.duration_seconds(), 2400);
        assert!(test.find_question(&QuestionId::new("q3")).is_some());
    }

    #[test]
    fn writing_test_requires_two_ordered_tasks() {
        let one = WritingTest::new(meta("w"), vec![task("task-1", WritingTaskKind::Task1, 150)]);
        assert_eq!(one.unwrap_err(), TestError::WritingTaskCount(1));

        let swapped = WritingTest::new(
            meta("w"),
            vec![
                task("task-2", WritingTaskKind::Task2, 250),
                task("task-1", WritingTaskKind::Task1, 150),
            ],
        );
        assert_eq!(swapped.unwrap_err(), TestError::WritingTaskOrder);

        let ok = WritingTest::new(
            meta("w"),
            vec![
                task("task-1", WritingTaskKind::Task1, 150),
                task("task-2", WritingTaskKind::Task2, 250),
            ],
        )
        .unwrap();
        assert_eq!(ok.task(WritingTaskKind::Task2).word_count, 250);
        assert_eq!(Test::Writing(ok).total_question_count(), 2);
    }

    #[test]
    fn from_pair_assigns_kinds_by_position() {
        let test = WritingTest::from_pair(
            meta("w"),
            task("task-1", WritingTaskKind::Task2, 150),
            task("task-2", WritingTaskKind::Task2, 250),
        );
        assert_eq!(test.task(WritingTaskKind::Task1).id, TaskId::new("task-1"));
        assert_eq!(test.tasks()[0].kind, WritingTaskKind::Task1);
    }

    #[test]
    fn skill_round_trips_through_str() {
        for skill in TestSkill::ALL {
            assert_eq!(skill.as_str().parse::<TestSkill>().unwrap(), skill);
        }
        assert!("speaking".parse::<TestSkill>().is_err());
    }

    #[test]
    fn only_heading_and_information_matching_take_lists() {
        assert!(QuestionType::MatchingHeadings.expects_list());
        assert!(QuestionType::MatchingInformation.expects_list());
        assert!(!QuestionType::Matching.expects_list());
        assert!(!QuestionType::MultipleChoice.expects_list());
    }

    #[test]
    fn difficulty_label_for_very_hard() {
        let d: TestDifficulty = "very_hard".parse().unwrap();
        assert_eq!(d.label(), "Very Hard");
    }

    #[test]
    fn meta_validation_rejects_blank_title() {
        let mut m = meta("x");
        m.title = "  ".into();
        assert_eq!(m.validate(), Err(TestError::EmptyTitle));
    }
}
