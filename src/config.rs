use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// 指向 TOML 配置文件的环境变量
pub const CONFIG_PATH_ENV: &str = "ANSWER_DESK_CONFIG";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端地址
    pub backend_base_url: String,
    /// 请求超时（秒），为空时使用传输层默认行为
    pub request_timeout_secs: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 默认日志过滤规则（RUST_LOG 优先）
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: "http://localhost:5000".to_string(),
            request_timeout_secs: None,
            verbose_logging: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// 读取配置：先加载 `ANSWER_DESK_CONFIG` 指向的文件（如有），再应用环境变量
    pub async fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_toml_file(Path::new(&path)).await?,
            Err(_) => Self::default(),
        };
        let config = base.with_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    pub async fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 按变量名覆盖字段，无法解析的值保持原样
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            backend_base_url: lookup("BACKEND_BASE_URL").unwrap_or(self.backend_base_url),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .or(self.request_timeout_secs),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            log_filter: lookup("LOG_FILTER").unwrap_or(self.log_filter),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBackendUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("BACKEND_BASE_URL", "http://10.0.0.2:8080"),
            ("REQUEST_TIMEOUT_SECS", "15"),
            ("VERBOSE_LOGGING", "not-a-bool"),
        ]);
        let config = Config::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.backend_base_url, "http://10.0.0.2:8080");
        assert_eq!(config.request_timeout_secs, Some(15));
        assert!(!config.verbose_logging);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_toml_partial() {
        let config = Config::from_toml_str(
            r#"
            backend_base_url = "http://qa.internal:5000/"
            verbose_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.backend_base_url, "http://qa.internal:5000/");
        assert!(config.verbose_logging);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_validate_empty_url() {
        let config = Config {
            backend_base_url: " ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBackendUrl)));
    }

    #[test]
    fn test_missing_file() {
        let result = tokio_test::block_on(Config::from_toml_file(Path::new(
            "/nonexistent/answer_desk.toml",
        )));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
