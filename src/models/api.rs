//! 后端 HTTP 接口的请求/响应结构

use serde::{Deserialize, Serialize};

use crate::models::question::Letter;

/// `POST /upload` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRequest {
    pub question: String,
    pub choices: [String; 4],
}

/// `POST /upload` 成功响应
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    pub result: AnswerResult,
    pub question_id: i64,
}

/// 后端生成的答案与解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub explanation: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact_checked: Option<bool>,
}

/// `POST /questions/{id}/report` 请求体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorrectionRequest {
    pub correction: Letter,
}

/// 后端结构化错误响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
}
