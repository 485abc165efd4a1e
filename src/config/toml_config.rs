use crate::config::proxy::{ProxyRule, DEFAULT_TARGET};
use crate::core::ConfigProvider;
use crate::utils::error::{ChatError, Result};
use crate::utils::validation::{validate_url, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

/// 客戶端設定檔：`[backend]` 必填，`[proxy]`、`[logging]` 選填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: BackendConfig,
    pub proxy: Option<ProxyRule>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

// 預設指向開發代理使用的遠端推論服務
impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: DEFAULT_TARGET.to_string(),
            },
            proxy: Some(ProxyRule::default()),
            logging: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::info!("loading config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ChatError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BACKEND_URL})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        // 驗證後端位址
        validate_url("backend.base_url", &self.backend.base_url)?;
        // 驗證代理規則
        if let Some(proxy) = &self.proxy {
            proxy.validate_rule()?;
        }
        Ok(())
    }

    /// 取得日誌等級，預設 info
    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    /// 取得日誌輸出格式
    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().map(|l| l.format).unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn backend_url(&self) -> &str {
        &self.backend.base_url
    }

    fn proxy_rule(&self) -> Option<&ProxyRule> {
        self.proxy.as_ref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[backend]
base_url = "https://chat.example.com"

[proxy]
target = "https://chat.example.com"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.backend_url(), "https://chat.example.com");
        let proxy = config.proxy_rule().unwrap();
        assert_eq!(proxy.prefix, "/api");
        assert!(proxy.change_origin);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SEAMLESS_TEST_BACKEND", "https://test.backend.dev");

        let toml_content = r#"
[backend]
base_url = "${SEAMLESS_TEST_BACKEND}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend.base_url, "https://test.backend.dev");
        assert!(config.proxy.is_none());
        assert_eq!(config.log_format(), LogFormat::Compact);

        std::env::remove_var("SEAMLESS_TEST_BACKEND");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[backend]
base_url = "not a url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert!(TomlConfig::from_toml_str("[backend]").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[backend]
base_url = "http://localhost:8000"

[proxy]
prefix = "/backend"
target = "http://localhost:8000"
change_origin = false
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let proxy = config.proxy.unwrap();
        assert_eq!(proxy.prefix, "/backend");
        assert!(!proxy.change_origin);
    }
}
