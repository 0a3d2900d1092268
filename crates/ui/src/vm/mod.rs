mod exam_vm;
mod history_vm;
mod html;
mod result_vm;
mod test_list_vm;
mod time_fmt;

pub use exam_vm::{
    AnswerInput, ExamHeaderVm, ExamOutcome, ExamVm, QuestionVm, SectionTabVm, WritingTaskVm,
    start_exam,
};
pub use history_vm::{HistoryFilter, ResultCardVm, score_class};
pub use html::sanitize_passage_html;
pub use result_vm::{
    CriterionVm, FeedbackVm, QuestionReviewVm, ResultHeaderVm, ResultNavVm, ResultVm,
    ReviewGroupVm, SectionScoreVm, TestLinkVm, WritingTaskReviewVm,
};
pub use test_list_vm::{TestCardVm, map_test_cards, skill_heading};
pub use time_fmt::{format_date, format_minutes};
