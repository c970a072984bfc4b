pub mod backend_client;

pub use backend_client::BackendClient;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{HealthStatus, Letter, Question, UploadRequest, UploadResponse};

/// 题目后端能力
///
/// 控制器只依赖这个 trait，测试中可替换为内存实现
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// `POST /upload`
    async fn create_question(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError>;

    /// `GET /questions`
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError>;

    /// `GET /questions/{id}`
    async fn get_question(&self, id: i64) -> Result<Question, ApiError>;

    /// `DELETE /questions/{id}`，任何 2xx 都视为成功
    async fn delete_question(&self, id: i64) -> Result<(), ApiError>;

    /// `POST /questions/{id}/report`，任何 2xx 都视为成功
    async fn report_correction(&self, id: i64, correction: Letter) -> Result<(), ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
