use crate::error::{Result, VisionError};
use std::env;

/// 正式環境的 batch annotate 端點
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// 預設的 API key 佔位字串，實際使用請設定 GOOGLE_VISION_API_KEY
pub const PLACEHOLDER_API_KEY: &str = "<ENTER VISION API KEY>";

pub const ENV_API_KEY: &str = "GOOGLE_VISION_API_KEY";
pub const ENV_ENDPOINT: &str = "GOOGLE_VISION_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "GOOGLE_VISION_TIMEOUT_SECS";

/// Vision 客戶端配置
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// API key（以 `key` query 參數送出）
    pub api_key: String,
    /// batch annotate 端點
    pub endpoint: String,
    /// 請求超時（秒），None 代表使用 HTTP 客戶端預設值
    pub timeout_secs: Option<u64>,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl VisionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// 設定請求超時，0 代表不設超時
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs).filter(|secs| *secs > 0);
        self
    }

    /// 從環境變數讀取配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 從任意 key-value 來源讀取配置（方便測試）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| VisionError::Config(format!("{} 未設定", ENV_API_KEY)))?;

        let mut config = Self::new(api_key);

        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            config = config.with_endpoint(endpoint.trim());
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                VisionError::Config(format!("{} 不是合法的秒數: {}", ENV_TIMEOUT_SECS, raw))
            })?;
            config = config.with_timeout(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = VisionConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api_key, PLACEHOLDER_API_KEY);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_from_lookup() {
        let config = VisionConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, " abc123 "),
            (ENV_ENDPOINT, "http://127.0.0.1:9000/v1/images:annotate"),
            (ENV_TIMEOUT_SECS, "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/v1/images:annotate");
        assert_eq!(config.timeout_secs, Some(15));
    }

    #[test]
    fn test_missing_api_key() {
        let result = VisionConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "  ")]));
        assert!(matches!(result, Err(VisionError::Config(_))));
    }

    #[test]
    fn test_zero_timeout() {
        let config = VisionConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "abc"),
            (ENV_TIMEOUT_SECS, "0"),
        ]))
        .unwrap();
        assert!(config.timeout_secs.is_none());

        let config = VisionConfig::new("abc").with_timeout(30).with_timeout(0);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_bad_timeout() {
        let result = VisionConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "abc"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert!(matches!(result, Err(VisionError::Config(_))));
    }
}
