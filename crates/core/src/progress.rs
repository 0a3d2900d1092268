//! Completion figures shown in the exam header and writing word counters.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerStore;
use crate::model::{Section, Test};

/// Lower bound (inclusive) of the medium band, in percent.
pub const MEDIUM_BAND_FROM: f64 = 33.0;
/// Lower bound (inclusive) of the high band, in percent.
pub const HIGH_BAND_FROM: f64 = 67.0;

const TASK1_WEIGHT: f64 = 0.4;
const TASK2_WEIGHT: f64 = 0.6;

/// `answered / total * 100`, clamped to `[0, 100]`. Zero when `total` is zero.
#[must_use]
pub fn answer_progress(answered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = answered as f64 / total as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Progress for a loaded listening or reading test.
///
/// Counts only entries for questions that belong to `test`.
#[must_use]
pub fn test_progress(test: &Test, answers: &AnswerStore) -> f64 {
    let answered = answers.answered_among(test.questions().map(|q| &q.id));
    answer_progress(answered, test.total_question_count())
}

/// Display only; never gates navigation.
#[must_use]
pub fn section_is_complete(section: &Section, answers: &AnswerStore) -> bool {
    section
        .questions
        .iter()
        .all(|question| answers.is_answered(&question.id))
}

/// Three-tier colour classification of a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressBand {
    Low,
    Medium,
    High,
}

impl ProgressBand {
    #[must_use]
    pub fn classify(percent: f64) -> Self {
        if percent < MEDIUM_BAND_FROM {
            Self::Low
        } else if percent < HIGH_BAND_FROM {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "progress-low",
            Self::Medium => "progress-medium",
            Self::High => "progress-high",
        }
    }
}

//
// ─── WRITING ───────────────────────────────────────────────────────────────────
//

/// Whitespace-separated token count; blank text is zero words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCountStatus {
    TooFew,
    GettingCloser,
    GoodLength,
    TooMany,
}

impl WordCountStatus {
    /// Classifies `words` against the recommended `target`.
    ///
    /// A zero target is treated as already satisfied.
    #[must_use]
    pub fn classify(words: usize, target: u32) -> Self {
        if target == 0 {
            return Self::GoodLength;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = words as f64 / f64::from(target) * 100.0;
        if pct < 70.0 {
            Self::TooFew
        } else if pct < 90.0 {
            Self::GettingCloser
        } else if pct <= 110.0 {
            Self::GoodLength
        } else {
            Self::TooMany
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TooFew => "Too few words",
            Self::GettingCloser => "Getting closer",
            Self::GoodLength => "Good length",
            Self::TooMany => "Too many words",
        }
    }
}

/// Share of the target reached, capped at 100.
#[must_use]
pub fn word_target_percent(words: usize, target: u32) -> f64 {
    if target == 0 {
        return 100.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = words as f64 / f64::from(target) * 100.0;
    pct.min(100.0)
}

/// Weighted writing progress: task 2 counts for 60 %.
#[must_use]
pub fn writing_progress(words: [usize; 2], targets: [u32; 2]) -> f64 {
    let ratio = |w: usize, t: u32| word_target_percent(w, t) / 100.0;
    (TASK1_WEIGHT * ratio(words[0], targets[0]) + TASK2_WEIGHT * ratio(words[1], targets[1]))
        * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionType};

    #[test]
    fn empty_total_is_zero_progress() {
        assert_eq!(answer_progress(0, 0), 0.0);
        assert_eq!(answer_progress(3, 0), 0.0);
    }

    #[test]
    fn progress_is_bounded() {
        assert_eq!(answer_progress(0, 5), 0.0);
        assert_eq!(answer_progress(5, 5), 100.0);
        assert_eq!(answer_progress(7, 5), 100.0);
        assert!((answer_progress(2, 5) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(ProgressBand::classify(0.0), ProgressBand::Low);
        assert_eq!(ProgressBand::classify(32.9), ProgressBand::Low);
        assert_eq!(ProgressBand::classify(33.0), ProgressBand::Medium);
        assert_eq!(ProgressBand::classify(66.9), ProgressBand::Medium);
        assert_eq!(ProgressBand::classify(67.0), ProgressBand::High);
    }

    #[test]
    fn section_complete_requires_every_question() {
        let section = Section::new("section-1", "One").with_questions(vec![
            Question::new("q1", QuestionType::MultipleChoice, "?", "A".into()),
            Question::new("q2", QuestionType::FillInTheBlanks, "?", "800".into()),
        ]);
        let mut answers = AnswerStore::new();
        answers.set_answer("q1".into(), "A");
        assert!(!section_is_complete(&section, &answers));
        answers.set_answer("q2".into(), "800");
        assert!(section_is_complete(&section, &answers));
    }

    #[test]
    fn count_words_handles_blank_and_runs_of_space() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t"), 0);
        assert_eq!(count_words("  one  two\nthree "), 3);
    }

    #[test]
    fn word_count_status_thresholds() {
        assert_eq!(WordCountStatus::classify(100, 150), WordCountStatus::TooFew);
        assert_eq!(WordCountStatus::classify(105, 150), WordCountStatus::GettingCloser);
        assert_eq!(WordCountStatus::classify(150, 150), WordCountStatus::GoodLength);
        assert_eq!(WordCountStatus::classify(165, 150), WordCountStatus::GoodLength);
        assert_eq!(WordCountStatus::classify(166, 150), WordCountStatus::TooMany);
        assert_eq!(WordCountStatus::TooFew.label(), "Too few words");
    }

    #[test]
    fn writing_progress_weights_tasks() {
        assert_eq!(writing_progress([0, 0], [150, 250]), 0.0);
        assert!((writing_progress([150, 0], [150, 250]) - 40.0).abs() < 1e-9);
        assert!((writing_progress([400, 250], [150, 250]) - 100.0).abs() < 1e-9);
        assert!((writing_progress([75, 125], [150, 250]) - 50.0).abs() < 1e-9);
    }
}
