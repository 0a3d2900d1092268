mod progress;
mod session;
mod submission;
mod workflow;

pub use crate::error::ExamError;
pub use progress::ExamProgress;
pub use session::{ExamSession, ExamTick};
pub use submission::{
    CONFIRM_LABEL, SUBMIT_WARNING, SubmissionReceipt, SubmitDialog, SubmitReason, new_result_id,
    result_route,
};
pub use workflow::ExamLoopService;
