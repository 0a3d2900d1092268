use chrono::{DateTime, Utc};
use ielts_core::AnswerStore;
use ielts_core::autosave::{AutoSaveEvent, AutoSaveNotifier, AutoSaveStatus};
use ielts_core::highlight::{HighlightColor, Highlighter, PassageDocument, Span, render_html};
use ielts_core::model::{
    AnswerValue, HighlightId, QuestionId, Section, Test, TestSkill, WritingTaskKind,
};
use ielts_core::navigator::SectionNavigator;
use ielts_core::progress::{
    WordCountStatus, count_words, section_is_complete, test_progress, writing_progress,
};
use ielts_core::timer::{CountdownTimer, TickOutcome, TimerState};
use tracing::{debug, info, warn};

use super::progress::ExamProgress;
use super::submission::{SubmissionReceipt, SubmitDialog, SubmitReason};
use crate::error::ExamError;

//
// ─── SKILL STATE ───────────────────────────────────────────────────────────────
//

/// Per-skill helpers wired next to the shared timer and answers.
#[derive(Debug)]
enum SkillState {
    Listening,
    Reading {
        document: PassageDocument,
        highlighter: Highlighter,
    },
    Writing {
        autosave: AutoSaveNotifier,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    InProgress,
    Confirming(SubmitDialog),
    Submitted(SubmissionReceipt),
}

/// Everything one `tick` changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamTick {
    pub timer: TickOutcome,
    pub autosave: Option<AutoSaveEvent>,
    /// Set when the timer ran out on this tick and the exam was submitted.
    pub auto_submitted: Option<SubmissionReceipt>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One candidate working through one practice test.
///
/// All time-dependent operations take `now` so the caller owns the clock.
#[derive(Debug)]
pub struct ExamSession {
    test: Test,
    answers: AnswerStore,
    timer: CountdownTimer,
    navigator: SectionNavigator,
    skill: SkillState,
    phase: Phase,
    started_at: DateTime<Utc>,
}

impl ExamSession {
    /// Starts the countdown for `test` at `now`.
    #[must_use]
    pub fn start(test: Test, now: DateTime<Utc>) -> Self {
        let test_id = test.id().to_string();
        let mut timer = CountdownTimer::new(test.duration_seconds()).with_on_time_up(move || {
            warn!(test_id = %test_id, "time is up");
        });
        timer.start(now);

        let (navigator, skill) = match &test {
            Test::Listening(listening) => (
                SectionNavigator::new(listening.sections.len()),
                SkillState::Listening,
            ),
            Test::Reading(reading) => (
                SectionNavigator::new(reading.sections.len()),
                SkillState::Reading {
                    document: PassageDocument::from_passage(&reading.passage),
                    highlighter: Highlighter::new(),
                },
            ),
            Test::Writing(_) => (
                SectionNavigator::for_writing(),
                SkillState::Writing {
                    autosave: AutoSaveNotifier::new(),
                },
            ),
        };

        info!(test_id = %test.id(), skill = %test.skill(), "exam started");
        Self {
            test,
            answers: AnswerStore::new(),
            timer,
            navigator,
            skill,
            phase: Phase::InProgress,
            started_at: now,
        }
    }

    #[must_use]
    pub fn test(&self) -> &Test {
        &self.test
    }

    #[must_use]
    pub fn skill(&self) -> TestSkill {
        self.test.skill()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    #[must_use]
    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    #[must_use]
    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    #[must_use]
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        match &self.phase {
            Phase::Submitted(receipt) => Some(receipt),
            _ => None,
        }
    }

    /// The open confirmation dialog, if any.
    #[must_use]
    pub fn pending_dialog(&self) -> Option<SubmitDialog> {
        match self.phase {
            Phase::Confirming(dialog) => Some(dialog),
            _ => None,
        }
    }

    //
    // ─── ANSWERS ───────────────────────────────────────────────────────────────
    //

    /// Records an answer for a listening or reading question.
    ///
    /// A blank value clears the answer.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Finished` after submission and
    /// `ExamError::UnknownQuestion` for ids outside this test.
    pub fn set_answer(
        &mut self,
        question_id: &QuestionId,
        value: impl Into<AnswerValue>,
    ) -> Result<(), ExamError> {
        self.ensure_open()?;
        if self.test.find_question(question_id).is_none() {
            return Err(ExamError::UnknownQuestion(question_id.clone()));
        }
        let value = value.into();
        if value.is_blank() {
            self.answers.remove_answer(question_id);
        } else {
            self.answers.set_answer(question_id.clone(), value);
        }
        Ok(())
    }

    #[must_use]
    pub fn answer(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get_answer(question_id)
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    pub fn next_section(&mut self) -> bool {
        self.navigator.next()
    }

    pub fn prev_section(&mut self) -> bool {
        self.navigator.prev()
    }

    pub fn go_to_section(&mut self, index: usize) -> bool {
        self.navigator.go_to(index)
    }

    pub fn go_to_task(&mut self, task: WritingTaskKind) -> bool {
        self.navigator.go_to_task(task)
    }

    /// `None` for writing tests.
    #[must_use]
    pub fn current_section(&self) -> Option<&Section> {
        self.test.sections().get(self.navigator.index())
    }

    #[must_use]
    pub fn section_complete(&self, index: usize) -> bool {
        self.test
            .sections()
            .get(index)
            .is_some_and(|section| section_is_complete(section, &self.answers))
    }

    //
    // ─── TIME ──────────────────────────────────────────────────────────────────
    //

    /// Advances the timer and the auto-save notifier to `now`.
    ///
    /// When the countdown reaches zero the exam is submitted with
    /// `SubmitReason::TimeUp`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> ExamTick {
        let timer = self.timer.tick(now);
        let autosave = self.poll_autosave(now);

        let mut auto_submitted = None;
        if self.timer.state() == TimerState::Expired && !self.is_finished() {
            auto_submitted = Some(self.finish(now, SubmitReason::TimeUp));
        }

        ExamTick {
            timer,
            autosave,
            auto_submitted,
        }
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining_seconds()
    }

    //
    // ─── PROGRESS ──────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn progress(&self) -> ExamProgress {
        match &self.test {
            Test::Writing(writing) => {
                let words = WritingTaskKind::ALL.map(|kind| self.word_count(kind));
                let [task1, task2] = writing.tasks();
                let targets = [task1.word_count, task2.word_count];
                let answered = words.iter().filter(|w| **w > 0).count();
                ExamProgress::new(answered, 2, writing_progress(words, targets))
            }
            test => {
                let answered = self
                    .answers
                    .answered_among(test.questions().map(|q| &q.id));
                ExamProgress::new(
                    answered,
                    test.total_question_count(),
                    test_progress(test, &self.answers),
                )
            }
        }
    }

    //
    // ─── READING ───────────────────────────────────────────────────────────────
    //

    /// Arms or disarms a highlight colour.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::WrongSkill` unless this is a reading test.
    pub fn toggle_highlight_color(
        &mut self,
        color: HighlightColor,
    ) -> Result<Option<HighlightColor>, ExamError> {
        let highlighter = self.highlighter_mut()?;
        Ok(highlighter.toggle_color(color))
    }

    /// Highlights `selection` with the armed colour.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::WrongSkill` unless this is a reading test.
    pub fn highlight_selection(&mut self, selection: &str) -> Result<Option<HighlightId>, ExamError> {
        let highlighter = self.highlighter_mut()?;
        let id = highlighter.select_text(selection);
        if let Some(id) = id {
            debug!(%id, "passage highlighted");
        }
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `ExamError::WrongSkill` unless this is a reading test.
    pub fn remove_highlight(&mut self, id: HighlightId) -> Result<bool, ExamError> {
        let highlighter = self.highlighter_mut()?;
        Ok(highlighter.remove(id).is_some())
    }

    /// # Errors
    ///
    /// Returns `ExamError::WrongSkill` unless this is a reading test.
    pub fn clear_highlights(&mut self) -> Result<(), ExamError> {
        let highlighter = self.highlighter_mut()?;
        highlighter.clear();
        Ok(())
    }

    /// `None` unless this is a reading test.
    #[must_use]
    pub fn highlighter(&self) -> Option<&Highlighter> {
        match &self.skill {
            SkillState::Reading { highlighter, .. } => Some(highlighter),
            _ => None,
        }
    }

    /// The passage with every highlight applied.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::WrongSkill` unless this is a reading test.
    pub fn passage_spans(&self) -> Result<Vec<Span>, ExamError> {
        match &self.skill {
            SkillState::Reading {
                document,
                highlighter,
            } => Ok(document.apply(highlighter.highlights())),
            _ => Err(ExamError::WrongSkill {
                expected: TestSkill::Reading,
            }),
        }
    }

    /// # Errors
    ///
    /// Returns `ExamError::WrongSkill` unless this is a reading test.
    pub fn passage_html(&self) -> Result<String, ExamError> {
        Ok(render_html(&self.passage_spans()?))
    }

    fn highlighter_mut(&mut self) -> Result<&mut Highlighter, ExamError> {
        match &mut self.skill {
            SkillState::Reading { highlighter, .. } => Ok(highlighter),
            _ => Err(ExamError::WrongSkill {
                expected: TestSkill::Reading,
            }),
        }
    }

    //
    // ─── WRITING ───────────────────────────────────────────────────────────────
    //

    /// Replaces the response for `task` and schedules an auto-save.
    ///
    /// Returns the new word count.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::WrongSkill` unless this is a writing test and
    /// `ExamError::Finished` after submission.
    pub fn write_task(
        &mut self,
        task: WritingTaskKind,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<usize, ExamError> {
        self.ensure_open()?;
        let key = self.task_key(task)?;
        if text.trim().is_empty() {
            self.answers.remove_answer(&key);
        } else {
            self.answers.set_answer(key, text);
        }
        if let SkillState::Writing { autosave } = &mut self.skill {
            autosave.record_change(now);
        }
        Ok(count_words(text))
    }

    #[must_use]
    pub fn task_response(&self, task: WritingTaskKind) -> &str {
        self.task_key(task)
            .ok()
            .and_then(|key| self.answers.get_answer(&key))
            .and_then(AnswerValue::as_text)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn word_count(&self, task: WritingTaskKind) -> usize {
        count_words(self.task_response(task))
    }

    /// `None` unless this is a writing test.
    #[must_use]
    pub fn word_status(&self, task: WritingTaskKind) -> Option<WordCountStatus> {
        match &self.test {
            Test::Writing(writing) => Some(WordCountStatus::classify(
                self.word_count(task),
                writing.task(task).word_count,
            )),
            _ => None,
        }
    }

    /// Completes an in-flight save, then advances the notifier.
    ///
    /// Always `None` for listening and reading tests.
    pub fn poll_autosave(&mut self, now: DateTime<Utc>) -> Option<AutoSaveEvent> {
        let SkillState::Writing { autosave } = &mut self.skill else {
            return None;
        };
        if autosave.status() == AutoSaveStatus::Saving {
            autosave.complete_save(now);
            debug!("draft saved");
        }
        autosave.poll(now)
    }

    #[must_use]
    pub fn autosave_status(&self) -> AutoSaveStatus {
        match &self.skill {
            SkillState::Writing { autosave } => autosave.status(),
            _ => AutoSaveStatus::Idle,
        }
    }

    fn task_key(&self, task: WritingTaskKind) -> Result<QuestionId, ExamError> {
        match &self.test {
            Test::Writing(writing) => Ok(QuestionId::new(writing.task(task).id.as_str())),
            _ => Err(ExamError::WrongSkill {
                expected: TestSkill::Writing,
            }),
        }
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────────
    //

    /// Opens the confirmation dialog with the current counts.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Finished` after submission.
    pub fn open_submit_dialog(&mut self) -> Result<SubmitDialog, ExamError> {
        self.ensure_open()?;
        let dialog = self.dialog();
        self.phase = Phase::Confirming(dialog);
        Ok(dialog)
    }

    /// Closes the dialog without submitting. No effect otherwise.
    pub fn cancel_submit(&mut self) {
        if matches!(self.phase, Phase::Confirming(_)) {
            self.phase = Phase::InProgress;
        }
    }

    /// Finishes the exam.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Finished` if already submitted and
    /// `ExamError::NoPendingSubmit` unless the dialog is open.
    pub fn confirm_submit(&mut self, now: DateTime<Utc>) -> Result<SubmissionReceipt, ExamError> {
        match self.phase {
            Phase::Submitted(_) => Err(ExamError::Finished),
            Phase::InProgress => Err(ExamError::NoPendingSubmit),
            Phase::Confirming(_) => Ok(self.finish(now, SubmitReason::Confirmed)),
        }
    }

    fn dialog(&self) -> SubmitDialog {
        let progress = self.progress();
        SubmitDialog {
            answered: progress.answered,
            total: progress.total,
        }
    }

    fn finish(&mut self, now: DateTime<Utc>, reason: SubmitReason) -> SubmissionReceipt {
        self.timer.stop();
        self.navigator.freeze();
        if let SkillState::Writing { autosave } = &mut self.skill {
            autosave.cancel();
        }

        let receipt = SubmissionReceipt::issue(
            self.test.skill(),
            self.test.id().clone(),
            now,
            self.dialog(),
            reason,
        );
        info!(
            test_id = %receipt.test_id,
            result_id = %receipt.result_id,
            answered = receipt.answered,
            total = receipt.total,
            ?reason,
            "exam submitted"
        );
        debug!(answers = ?self.answers, "submitted answers");
        self.phase = Phase::Submitted(receipt.clone());
        receipt
    }

    fn ensure_open(&self) -> Result<(), ExamError> {
        if self.is_finished() {
            return Err(ExamError::Finished);
        }
        Ok(())
    }
}
