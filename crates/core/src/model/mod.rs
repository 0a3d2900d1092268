mod answer;
mod ids;
mod practice_test;
mod result;
mod user;

pub use answer::AnswerValue;
pub use ids::{HighlightId, ParseIdError, QuestionId, ResultId, SectionId, TaskId, TestId};

pub use practice_test::{
    ListeningTest, MarkingCriteria, Question, QuestionType, ReadingTest, Section, Test,
    TestDifficulty, TestError, TestMeta, TestSkill, WritingTask, WritingTaskKind, WritingTest,
};
pub use result::{
    BandScore, BandScoreError, FeedbackItem, ImprovementStrategy, ListeningResult,
    QuestionResult, ReadingResult, ResultSummary, SectionQuestions, SectionScore, TestResult,
    WritingCriteria, WritingResult, WritingTaskResult,
};
pub use user::{User, UserError, UserRole};
