//! 题目后端 HTTP 客户端
//!
//! 封装所有与后端 API 相关的调用逻辑

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::clients::QuestionApi;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{
    CorrectionRequest, ErrorBody, HealthStatus, Letter, Question, UploadRequest, UploadResponse,
};

/// 后端客户端
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// 创建新的后端客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(AppError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    /// 发送请求，非 2xx 转为 `ApiError::BadResponse`
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        debug!("请求后端: {}", endpoint);

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        let status = response.status();
        debug!("后端响应: {} -> {}", endpoint, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        Err(parse_failure(endpoint, status.as_u16(), &body))
    }

    async fn read_json<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, ApiError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        serde_json::from_slice(&bytes).map_err(|source| ApiError::JsonParseFailed {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl QuestionApi for BackendClient {
    async fn create_question(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        let endpoint = "upload";
        let response = self
            .send(endpoint, self.http.post(self.url(endpoint)).json(request))
            .await?;
        Self::read_json(endpoint, response).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        let endpoint = "questions";
        let response = self.send(endpoint, self.http.get(self.url(endpoint))).await?;
        Self::read_json(endpoint, response).await
    }

    async fn get_question(&self, id: i64) -> Result<Question, ApiError> {
        let endpoint = format!("questions/{}", id);
        let response = self.send(&endpoint, self.http.get(self.url(&endpoint))).await?;
        Self::read_json(&endpoint, response).await
    }

    async fn delete_question(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = format!("questions/{}", id);
        self.send(&endpoint, self.http.delete(self.url(&endpoint)))
            .await?;
        Ok(())
    }

    async fn report_correction(&self, id: i64, correction: Letter) -> Result<(), ApiError> {
        let endpoint = format!("questions/{}/report", id);
        let body = CorrectionRequest { correction };
        self.send(&endpoint, self.http.post(self.url(&endpoint)).json(&body))
            .await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let endpoint = "health";
        let response = self.send(endpoint, self.http.get(self.url(endpoint))).await?;
        Self::read_json(endpoint, response).await
    }
}

// ========== 辅助函数 ==========

fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// 解析非 2xx 响应体，无法解析时只保留状态码
fn parse_failure(endpoint: &str, status: u16, body: &[u8]) -> ApiError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    ApiError::BadResponse {
        endpoint: endpoint.to_string(),
        status,
        error: parsed.error,
        details: parsed.details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000/", "/questions/3/report"),
            "http://localhost:5000/questions/3/report"
        );
        assert_eq!(join_url("http://localhost:5000", "upload"), "http://localhost:5000/upload");
    }

    #[test]
    fn test_new_trims_base_url() {
        let config = Config {
            backend_base_url: "http://localhost:5000///".to_string(),
            request_timeout_secs: Some(5),
            ..Config::default()
        };
        let client = BackendClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("health"), "http://localhost:5000/health");
    }

    #[test]
    fn test_parse_failure_structured_body() {
        let body = br#"{"error": "Internal server error", "details": "db down"}"#;
        let err = parse_failure("upload", 500, body);

        match &err {
            ApiError::BadResponse {
                status,
                error,
                details,
                ..
            } => {
                assert_eq!(*status, 500);
                assert_eq!(error.as_deref(), Some("Internal server error"));
                assert_eq!(details.as_deref(), Some("db down"));
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
        assert_eq!(err.user_message(), "Internal server error");
    }

    #[test]
    fn test_parse_failure_html_body() {
        let err = parse_failure("questions/9", 404, b"<html>Not Found</html>");
        assert_eq!(err.user_message(), "Request failed with status code 404");
    }
}
