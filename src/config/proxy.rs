use crate::utils::error::{ChatError, Result};
use crate::utils::validation::validate_url;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_PREFIX: &str = "/api";
pub const DEFAULT_TARGET: &str =
    "https://modal-labs-vishy-dev--seamless-chat-seamlessm4t-asgi-app.modal.run";

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_change_origin() -> bool {
    true
}

/// 開發用代理規則：以 `prefix` 開頭的請求轉發到 `target`，並移除前綴
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    pub target: String,
    /// 是否將 `Origin` 標頭改寫為目標來源
    #[serde(default = "default_change_origin")]
    pub change_origin: bool,
}

impl Default for ProxyRule {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            target: DEFAULT_TARGET.to_string(),
            change_origin: true,
        }
    }
}

impl ProxyRule {
    /// 判斷路徑是否由此規則代理。純字串前綴比對，`/apiary` 也算符合
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(self.prefix.as_str())
    }

    /// 轉發到目標時的路徑 (移除前綴)；規則不適用時回傳 `None`
    /// 例如 `/api/rooms` -> `/rooms`，`/apiary` -> `ary`，與開發伺服器一致
    pub fn rewrite_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        if !self.matches(path) {
            return None;
        }
        Some(&path[self.prefix.len()..])
    }

    /// 組出完整的轉發 URL，保留查詢字串
    pub fn forward_url(&self, path: &str) -> Result<Option<Url>> {
        let Some(rest) = self.rewrite_path(path) else {
            return Ok(None);
        };

        let separator = if rest.starts_with('/') { "" } else { "/" };
        let joined = format!("{}{}{}", self.target.trim_end_matches('/'), separator, rest);

        let url = Url::parse(&joined).map_err(|e| ChatError::ConfigError {
            message: format!("cannot forward {} to {}: {}", path, joined, e),
        })?;
        tracing::debug!("proxy {} -> {}", path, url);
        Ok(Some(url))
    }

    /// 啟用 `change_origin` 時，轉發請求應帶的 `Origin` 標頭值
    pub fn origin_header(&self) -> Result<Option<String>> {
        if !self.change_origin {
            return Ok(None);
        }
        let url = Url::parse(&self.target).map_err(|e| ChatError::ConfigError {
            message: format!("invalid proxy target {}: {}", self.target, e),
        })?;
        Ok(Some(url.origin().ascii_serialization()))
    }

    /// 驗證目標 URL 與前綴格式
    pub fn validate_rule(&self) -> Result<()> {
        validate_url("proxy.target", &self.target)?;
        if !self.prefix.starts_with('/') {
            return Err(ChatError::InvalidValue {
                field: "proxy.prefix".to_string(),
                value: self.prefix.clone(),
                reason: "prefix must start with '/'".to_string(),
            });
        }
        Ok(())
    }
}
