use thiserror::Error;

use crate::models::question::Letter;

/// 传输层失败且没有可用描述时显示的提示
pub const GENERIC_FAILURE: &str = "Unknown error occurred";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单校验失败（未发出任何请求）
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 上一次提交尚未完成
    #[error("题目正在提交中，请等待完成")]
    SubmissionInProgress,
    /// HTTP 客户端初始化失败
    #[error("HTTP客户端初始化失败: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// 终端读写失败
    #[error("终端读写失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 校验错误，消息直接展示给用户
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the question.")]
    EmptyQuestion,
    #[error("Please fill in choice {0}.")]
    EmptyChoice(Letter),
    #[error("Please select a valid correction (A, B, C, or D).")]
    NoActiveCorrection,
    #[error("Please select a valid correction (A, B, C, or D).")]
    InvalidCorrection(String),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（无法连接、超时等）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 后端返回非 2xx
    #[error("API返回错误响应 ({endpoint}): status={status}, error={error:?}, details={details:?}")]
    BadResponse {
        endpoint: String,
        status: u16,
        error: Option<String>,
        details: Option<String>,
    },
    /// 响应体 JSON 解析失败
    #[error("JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 创建后端错误响应
    pub fn bad_response(endpoint: impl Into<String>, status: u16, error: Option<String>) -> Self {
        ApiError::BadResponse {
            endpoint: endpoint.into(),
            status,
            error,
            details: None,
        }
    }

    /// 提取给用户看的错误信息
    ///
    /// 优先使用后端返回的 `error` 字段，其次是传输层描述，最后是通用提示。
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadResponse {
                error: Some(error), ..
            } if !error.trim().is_empty() => error.clone(),
            ApiError::BadResponse { status, .. } => {
                format!("Request failed with status code {}", status)
            }
            ApiError::RequestFailed { source, .. } => {
                let message = source.to_string();
                if message.trim().is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                }
            }
            ApiError::JsonParseFailed { .. } => GENERIC_FAILURE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 后端地址为空
    #[error("后端地址不能为空")]
    EmptyBackendUrl,
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
