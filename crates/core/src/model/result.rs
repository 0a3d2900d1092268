use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::answer::AnswerValue;
use crate::model::ids::{QuestionId, ResultId, TaskId, TestId};
use crate::model::practice_test::{QuestionType, TestSkill, WritingTaskKind};

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum BandScoreError {
    #[error("band score {0} is outside 0.0..=9.0")]
    OutOfRange(f32),

    #[error("band score {0} is not a multiple of 0.5")]
    NotHalfStep(f32),
}

/// IELTS band on the 0–9 scale in half-band steps.
///
/// Stored as a count of half bands so equality and ordering are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct BandScore(u8);

impl BandScore {
    pub const MAX: BandScore = BandScore(18);

    /// # Errors
    ///
    /// Returns `BandScoreError` if `value` is outside the scale or not a half step.
    pub fn new(value: f32) -> Result<Self, BandScoreError> {
        if !(0.0..=9.0).contains(&value) {
            return Err(BandScoreError::OutOfRange(value));
        }
        let doubled = value * 2.0;
        if (doubled - doubled.round()).abs() > f32::EPSILON {
            return Err(BandScoreError::NotHalfStep(value));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let halves = doubled.round() as u8;
        Ok(Self(halves))
    }

    /// Clamps to the scale and rounds to the nearest half band.
    #[must_use]
    pub fn saturating(value: f32) -> Self {
        let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 9.0) };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let halves = (clamped * 2.0).round() as u8;
        Self(halves)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        f32::from(self.0) / 2.0
    }
}

impl TryFrom<f32> for BandScore {
    type Error = BandScoreError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BandScore> for f32 {
    fn from(score: BandScore) -> Self {
        score.value()
    }
}

impl fmt::Display for BandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section: String,
    pub score: u32,
    pub total: u32,
}

impl SectionScore {
    #[must_use]
    pub fn new(section: impl Into<String>, score: u32, total: u32) -> Self {
        Self {
            section: section.into(),
            score,
            total,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total) * 100.0
    }
}

/// A block of AI-style feedback shown on the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub title: String,
    pub description: String,
    pub suggestions: Vec<String>,
    pub score: Option<BandScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionType,
    pub user_answer: AnswerValue,
    pub correct_answer: AnswerValue,
    pub options: Option<Vec<String>>,
    pub explanation: Option<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionQuestions {
    pub title: String,
    pub questions: Vec<QuestionResult>,
}

impl SectionQuestions {
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementStrategy {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingCriteria {
    pub name: String,
    pub score: BandScore,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingTaskResult {
    pub id: TaskId,
    pub kind: WritingTaskKind,
    pub question: String,
    pub word_count: u32,
    pub user_answer: String,
    pub criteria: Vec<WritingCriteria>,
    pub score: BandScore,
}

/// Fields every canned result carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub id: ResultId,
    pub test_id: TestId,
    pub test_title: String,
    pub score: BandScore,
    pub completed_at: DateTime<Utc>,
    /// Display label, e.g. `54 minutes`.
    pub time_spent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingResult {
    pub summary: ResultSummary,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub section_scores: Vec<SectionScore>,
    pub question_review: Vec<SectionQuestions>,
    pub ai_feedback: Vec<FeedbackItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListeningResult {
    pub summary: ResultSummary,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub section_scores: Vec<SectionScore>,
    pub question_review: Vec<SectionQuestions>,
    pub ai_feedback: Vec<FeedbackItem>,
    pub improvement_strategies: Vec<ImprovementStrategy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingResult {
    pub summary: ResultSummary,
    pub writing_tasks: Vec<WritingTaskResult>,
    pub ai_feedback: Vec<FeedbackItem>,
    pub improvement_points: Vec<String>,
    pub sample_improvement: String,
}

/// A precomputed result. Never derived from a submitted answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "skill", rename_all = "snake_case")]
pub enum TestResult {
    Reading(ReadingResult),
    Listening(ListeningResult),
    Writing(WritingResult),
}

impl TestResult {
    #[must_use]
    pub fn summary(&self) -> &ResultSummary {
        match self {
            Self::Reading(r) => &r.summary,
            Self::Listening(r) => &r.summary,
            Self::Writing(r) => &r.summary,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ResultId {
        &self.summary().id
    }

    #[must_use]
    pub fn skill(&self) -> TestSkill {
        match self {
            Self::Reading(_) => TestSkill::Reading,
            Self::Listening(_) => TestSkill::Listening,
            Self::Writing(_) => TestSkill::Writing,
        }
    }

    #[must_use]
    pub fn score(&self) -> BandScore {
        self.summary().score
    }

    #[must_use]
    pub fn ai_feedback(&self) -> &[FeedbackItem] {
        match self {
            Self::Reading(r) => &r.ai_feedback,
            Self::Listening(r) => &r.ai_feedback,
            Self::Writing(r) => &r.ai_feedback,
        }
    }

    /// `(correct, total)` for objective papers; `None` for writing.
    #[must_use]
    pub fn correct_ratio(&self) -> Option<(u32, u32)> {
        match self {
            Self::Reading(r) => Some((r.correct_answers, r.total_questions)),
            Self::Listening(r) => Some((r.correct_answers, r.total_questions)),
            Self::Writing(_) => None,
        }
    }
}
