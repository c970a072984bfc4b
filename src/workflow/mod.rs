pub mod question_list;
pub mod submission;

pub use question_list::{DeleteOutcome, QuestionListManager};
pub use submission::SubmissionController;
