use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerValue, QuestionId};

/// Answers collected during one exam session, keyed by question.
///
/// Presence of a key is what counts as "answered"; values are never checked
/// against the reference answer here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the answer for `question_id`.
    ///
    /// Returns the previous value, if any.
    pub fn set_answer(
        &mut self,
        question_id: QuestionId,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.answers.insert(question_id, value.into())
    }

    /// `None` means unanswered.
    #[must_use]
    pub fn get_answer(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn remove_answer(&mut self, question_id: &QuestionId) -> Option<AnswerValue> {
        self.answers.remove(question_id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Counts how many of `ids` have an entry.
    pub fn answered_among<'a, I>(&self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a QuestionId>,
    {
        ids.into_iter().filter(|id| self.is_answered(id)).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}
