pub mod api;
pub mod draft;
pub mod question;

pub use api::{AnswerResult, CorrectionRequest, ErrorBody, HealthStatus, UploadRequest, UploadResponse};
pub use draft::{DraftQuestion, ReportDraft};
pub use question::{ChoiceView, Letter, Question};
