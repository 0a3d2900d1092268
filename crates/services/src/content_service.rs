use std::sync::Arc;

use ielts_core::model::{
    AnswerValue, ListeningTest, MarkingCriteria, Question, QuestionId, QuestionType, ReadingTest,
    Section, SectionId, TaskId, Test, TestDifficulty, TestId, TestMeta, TestSkill, WritingTask,
    WritingTaskKind, WritingTest,
};
use storage::TestRepository;
use tracing::{debug, info};

use crate::Clock;
use crate::error::ContentError;
use crate::filters::TestFilters;

/// Default paper length offered by the create form, in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 40;

const TASK1_TARGET_WORDS: u32 = 150;
const TASK2_TARGET_WORDS: u32 = 250;

/// Header fields of a test, as edited in the content manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDetails {
    pub title: String,
    pub difficulty: TestDifficulty,
    pub duration: u32,
    pub description: Option<String>,
    pub instructions: String,
}

impl TestDetails {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            difficulty: TestDifficulty::Medium,
            duration: DEFAULT_DURATION_MINUTES,
            description: None,
            instructions: String::new(),
        }
    }
}

impl From<&TestMeta> for TestDetails {
    fn from(meta: &TestMeta) -> Self {
        Self {
            title: meta.title.clone(),
            difficulty: meta.difficulty,
            duration: meta.duration,
            description: meta.description.clone(),
            instructions: meta.instructions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDraft {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    pub kind: QuestionType,
    pub text: String,
    /// Blank options are dropped; an all-blank list becomes `None`.
    pub options: Vec<String>,
    pub correct_answer: AnswerValue,
    pub marks: u32,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(kind: QuestionType, text: impl Into<String>, correct_answer: AnswerValue) -> Self {
        Self {
            kind,
            text: text.into(),
            options: Vec::new(),
            correct_answer,
            marks: 1,
        }
    }
}

/// Catalog editing for admins and content managers.
///
/// Edits go to the in-process repository only.
#[derive(Clone)]
pub struct ContentManagerService {
    clock: Clock,
    tests: Arc<dyn TestRepository>,
}

impl ContentManagerService {
    #[must_use]
    pub fn new(clock: Clock, tests: Arc<dyn TestRepository>) -> Self {
        Self { clock, tests }
    }

    /// Tests for the manager's list view.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Storage` if repository access fails.
    pub async fn list(&self, filters: &TestFilters) -> Result<Vec<Test>, ContentError> {
        let tests = self.tests.list_tests().await?;
        Ok(filters.apply(tests))
    }

    /// Create an empty test of `skill` with the next free `{skill}-test-{n}` id.
    ///
    /// Writing tests start with two blank tasks at the usual word targets.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Test` if the details fail validation.
    /// Returns `ContentError::Storage` if persistence fails.
    pub async fn create_test(
        &self,
        skill: TestSkill,
        details: TestDetails,
        author: &str,
    ) -> Result<Test, ContentError> {
        let existing = self.tests.list_tests().await?;
        let prefix = format!("{}-test-", skill.as_str());
        let n = next_number(existing.iter().map(|t| t.id().as_str()), &prefix);
        let id = TestId::new(format!("{prefix}{n}"));

        let now = self.clock.now();
        let meta = TestMeta {
            id,
            title: details.title.trim().to_owned(),
            difficulty: details.difficulty,
            duration: details.duration,
            description: details.description,
            instructions: details.instructions,
            created_at: now,
            updated_at: now,
            created_by: author.to_owned(),
        };
        meta.validate()?;

        let test = match skill {
            TestSkill::Listening => Test::Listening(ListeningTest {
                meta,
                audio_url: String::new(),
                audio_length: 0,
                transcript: None,
                sections: Vec::new(),
            }),
            TestSkill::Reading => Test::Reading(ReadingTest {
                meta,
                passage: String::new(),
                sections: Vec::new(),
            }),
            TestSkill::Writing => Test::Writing(WritingTest::new(
                meta,
                vec![
                    blank_task(WritingTaskKind::Task1, TASK1_TARGET_WORDS),
                    blank_task(WritingTaskKind::Task2, TASK2_TARGET_WORDS),
                ],
            )?),
        };

        self.tests.upsert_test(&test).await?;
        info!(test_id = %test.id(), %skill, "test created");
        Ok(test)
    }

    /// # Errors
    ///
    /// Returns `ContentError::TestNotFound` for an unknown id.
    /// Returns `ContentError::Test` if the new details fail validation.
    /// Returns `ContentError::Storage` if persistence fails.
    pub async fn update_details(
        &self,
        id: &TestId,
        details: TestDetails,
    ) -> Result<Test, ContentError> {
        let mut test = self.load(id).await?;
        let now = self.clock.now();
        let meta = test.meta_mut();
        meta.title = details.title.trim().to_owned();
        meta.difficulty = details.difficulty;
        meta.duration = details.duration;
        meta.description = details.description;
        meta.instructions = details.instructions;
        meta.validate()?;
        meta.updated_at = now;

        self.tests.upsert_test(&test).await?;
        debug!(test_id = %id, "test details updated");
        Ok(test)
    }

    /// # Errors
    ///
    /// Returns `ContentError::TestNotFound` for an unknown id.
    /// Returns `ContentError::Storage` if persistence fails.
    pub async fn delete_test(&self, id: &TestId) -> Result<(), ContentError> {
        match self.tests.delete_test(id).await {
            Ok(()) => {
                info!(test_id = %id, "test deleted");
                Ok(())
            }
            Err(storage::StorageError::NotFound) => Err(ContentError::TestNotFound(id.clone())),
            Err(err) => Err(err.into()),
        }
    }

    /// Append a section with the next free `section-{n}` id.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NoSections` for writing tests,
    /// `ContentError::EmptySectionTitle` for a blank title,
    /// `ContentError::TestNotFound` for an unknown test.
    /// Returns `ContentError::Storage` if persistence fails.
    pub async fn add_section(
        &self,
        test_id: &TestId,
        draft: SectionDraft,
    ) -> Result<Section, ContentError> {
        let title = non_blank(&draft.title).ok_or(ContentError::EmptySectionTitle)?;
        let mut test = self.load(test_id).await?;
        let skill = test.skill();
        let sections = test
            .sections_mut()
            .ok_or(ContentError::NoSections(skill))?;

        let n = next_number(sections.iter().map(|s| s.id.as_str()), "section-");
        let mut section = Section::new(SectionId::new(format!("section-{n}")), title);
        section.description = draft.description.and_then(|d| non_blank(&d));
        sections.push(section.clone());

        self.touch_and_save(&mut test).await?;
        debug!(test_id = %test_id, section_id = %section.id, "section added");
        Ok(section)
    }

    /// Replace a section's title and description, keeping its questions.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::SectionNotFound` if the section is not in the test,
    /// plus the errors of [`Self::add_section`].
    pub async fn update_section(
        &self,
        test_id: &TestId,
        section_id: &SectionId,
        draft: SectionDraft,
    ) -> Result<Section, ContentError> {
        let title = non_blank(&draft.title).ok_or(ContentError::EmptySectionTitle)?;
        let mut test = self.load(test_id).await?;
        let section = section_mut(&mut test, section_id)?;
        section.title = title;
        section.description = draft.description.and_then(|d| non_blank(&d));
        let updated = section.clone();

        self.touch_and_save(&mut test).await?;
        debug!(test_id = %test_id, %section_id, "section updated");
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns `ContentError::SectionNotFound`, `ContentError::NoSections`,
    /// `ContentError::TestNotFound` or `ContentError::Storage`.
    pub async fn remove_section(
        &self,
        test_id: &TestId,
        section_id: &SectionId,
    ) -> Result<(), ContentError> {
        let mut test = self.load(test_id).await?;
        let skill = test.skill();
        let sections = test
            .sections_mut()
            .ok_or(ContentError::NoSections(skill))?;
        let pos = sections
            .iter()
            .position(|s| &s.id == section_id)
            .ok_or_else(|| ContentError::SectionNotFound(section_id.clone()))?;
        sections.remove(pos);

        self.touch_and_save(&mut test).await?;
        debug!(test_id = %test_id, %section_id, "section removed");
        Ok(())
    }

    /// Append a question to a section. Question ids (`q{n}`) are unique across the test.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyQuestion` for blank text,
    /// `ContentError::SectionNotFound`, `ContentError::NoSections`,
    /// `ContentError::TestNotFound` or `ContentError::Storage`.
    pub async fn add_question(
        &self,
        test_id: &TestId,
        section_id: &SectionId,
        draft: QuestionDraft,
    ) -> Result<Question, ContentError> {
        let text = non_blank(&draft.text).ok_or(ContentError::EmptyQuestion)?;
        let mut test = self.load(test_id).await?;
        let n = next_number(test.questions().map(|q| q.id.as_str()), "q");

        let options: Vec<String> = draft
            .options
            .iter()
            .filter_map(|o| non_blank(o))
            .collect();
        let mut question = Question::new(
            QuestionId::new(format!("q{n}")),
            draft.kind,
            text,
            draft.correct_answer,
        )
        .with_marks(draft.marks.max(1));
        if !options.is_empty() {
            question = question.with_options(options);
        }

        section_mut(&mut test, section_id)?
            .questions
            .push(question.clone());

        self.touch_and_save(&mut test).await?;
        debug!(test_id = %test_id, question_id = %question.id, "question added");
        Ok(question)
    }

    /// # Errors
    ///
    /// Returns `ContentError::QuestionNotFound` if the question is not in the
    /// section, plus the lookup errors of [`Self::add_question`].
    pub async fn remove_question(
        &self,
        test_id: &TestId,
        section_id: &SectionId,
        question_id: &QuestionId,
    ) -> Result<(), ContentError> {
        let mut test = self.load(test_id).await?;
        let questions = &mut section_mut(&mut test, section_id)?.questions;
        let pos = questions
            .iter()
            .position(|q| &q.id == question_id)
            .ok_or_else(|| ContentError::QuestionNotFound(question_id.clone()))?;
        questions.remove(pos);

        self.touch_and_save(&mut test).await?;
        Ok(())
    }

    async fn load(&self, id: &TestId) -> Result<Test, ContentError> {
        self.tests
            .get_test(id)
            .await?
            .ok_or_else(|| ContentError::TestNotFound(id.clone()))
    }

    async fn touch_and_save(&self, test: &mut Test) -> Result<(), ContentError> {
        test.meta_mut().updated_at = self.clock.now();
        self.tests.upsert_test(test).await?;
        Ok(())
    }
}

fn section_mut<'a>(
    test: &'a mut Test,
    section_id: &SectionId,
) -> Result<&'a mut Section, ContentError> {
    let skill = test.skill();
    test.sections_mut()
        .ok_or(ContentError::NoSections(skill))?
        .iter_mut()
        .find(|s| &s.id == section_id)
        .ok_or_else(|| ContentError::SectionNotFound(section_id.clone()))
}

/// One past the highest numeric suffix among ids starting with `prefix`.
fn next_number<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix)?.parse::<u64>().ok())
        .max()
        .map_or(1, |n| n + 1)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn blank_task(kind: WritingTaskKind, word_count: u32) -> WritingTask {
    WritingTask {
        id: TaskId::new(format!("task-{}", kind.index() + 1)),
        kind,
        question: String::new(),
        word_count,
        image_url: None,
        sample_answer: None,
        marking_criteria: MarkingCriteria {
            task_achievement: String::new(),
            coherence_cohesion: String::new(),
            lexical_resource: String::new(),
            grammatical_range: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ielts_core::time::fixed_clock;
    use storage::InMemoryRepository;

    fn service() -> ContentManagerService {
        ContentManagerService::new(fixed_clock(), Arc::new(InMemoryRepository::seeded()))
    }

    #[test]
    fn next_number_skips_foreign_ids() {
        let ids = ["reading-test-1", "reading-test-7", "reading-test-x", "writing-test-9"];
        assert_eq!(next_number(ids.into_iter(), "reading-test-"), 8);
        assert_eq!(next_number(std::iter::empty(), "q"), 1);
    }

    #[tokio::test]
    async fn create_test_allocates_next_id() {
        let svc = service();
        let created = svc
            .create_test(TestSkill::Reading, TestDetails::new("New reading"), "cm@example.com")
            .await
            .unwrap();
        assert_eq!(created.id().as_str(), "reading-test-3");
        assert_eq!(created.meta().duration, DEFAULT_DURATION_MINUTES);
        assert!(created.sections().is_empty());

        let all = svc.list(&TestFilters::default()).await.unwrap();
        assert_eq!(all.len(), 7);
    }

    #[tokio::test]
    async fn writing_test_starts_with_two_tasks() {
        let created = service()
            .create_test(TestSkill::Writing, TestDetails::new("Essay"), "admin")
            .await
            .unwrap();
        let Test::Writing(writing) = created else {
            panic!("writing test expected");
        };
        assert_eq!(writing.task(WritingTaskKind::Task2).word_count, 250);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let err = service()
            .create_test(TestSkill::Listening, TestDetails::new("  "), "admin")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Test(_)));
    }

    #[tokio::test]
    async fn sections_and_questions_get_fresh_ids() {
        let svc = service();
        let id = TestId::new("listening-test-1");
        let section = svc
            .add_section(
                &id,
                SectionDraft {
                    title: "Section 3".into(),
                    description: Some("   ".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(section.id.as_str(), "section-3");
        assert!(section.description.is_none());

        let mut draft = QuestionDraft::new(
            QuestionType::MultipleChoice,
            "Where is the library?",
            AnswerValue::text("North"),
        );
        draft.options = vec!["North".into(), String::new(), "South".into()];
        let question = svc.add_question(&id, &section.id, draft).await.unwrap();
        assert_eq!(question.id.as_str(), "q6");
        assert_eq!(question.options.as_deref().map(<[String]>::len), Some(2));

        svc.remove_question(&id, &section.id, &question.id).await.unwrap();
        svc.remove_section(&id, &section.id).await.unwrap();
        let test = svc.list(&TestFilters::default()).await.unwrap().remove(0);
        assert_eq!(test.sections().len(), 2);
    }

    #[tokio::test]
    async fn writing_tests_have_no_sections() {
        let err = service()
            .add_section(
                &TestId::new("writing-test-1"),
                SectionDraft {
                    title: "Extra".into(),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NoSections(TestSkill::Writing)));
    }

    #[tokio::test]
    async fn missing_targets_are_reported() {
        let svc = service();
        let err = svc.delete_test(&TestId::new("nope")).await.unwrap_err();
        assert!(matches!(err, ContentError::TestNotFound(_)));

        let err = svc
            .remove_question(
                &TestId::new("reading-test-1"),
                &SectionId::new("section-1"),
                &QuestionId::new("q99"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::QuestionNotFound(_)));
    }

    #[tokio::test]
    async fn update_details_keeps_content() {
        let svc = service();
        let id = TestId::new("reading-test-2");
        let mut details = TestDetails::new("Climate reading");
        details.duration = 60;
        let updated = svc.update_details(&id, details).await.unwrap();
        assert_eq!(updated.title(), "Climate reading");
        assert_eq!(updated.sections().len(), 1);
    }

    #[tokio::test]
    async fn update_section_keeps_questions() {
        let svc = service();
        let id = TestId::new("reading-test-1");
        let section_id = SectionId::new("section-2");
        let updated = svc
            .update_section(
                &id,
                &section_id,
                SectionDraft {
                    title: "  Passage 2: Trade routes ".into(),
                    description: Some("Answer question 4.".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Passage 2: Trade routes");
        assert_eq!(updated.questions.len(), 1);

        let err = svc
            .update_section(
                &id,
                &section_id,
                SectionDraft {
                    title: " ".into(),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::EmptySectionTitle));

        let err = svc
            .update_section(
                &id,
                &SectionId::new("section-9"),
                SectionDraft {
                    title: "Missing".into(),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::SectionNotFound(_)));
    }

    #[test]
    fn details_mirror_meta() {
        let test = storage::fixtures::mock_tests().remove(0);
        let details = TestDetails::from(test.meta());
        assert_eq!(details.title, test.meta().title);
        assert_eq!(details.duration, 40);
    }
}
