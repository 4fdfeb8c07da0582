use crate::utils::error::{FireError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// fire.toml 設定檔，所有欄位皆為選填
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置；讀檔失敗視為配置錯誤
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| FireError::Config {
            message: format!("Cannot read config file '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FireError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIRE_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[api]
base_url = "https://manage.24fire.de/api"
key = "abc123"
timeout_seconds = 30
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://manage.24fire.de/api")
        );
        assert_eq!(config.api.key.as_deref(), Some("abc123"));
        assert_eq!(config.api.timeout_seconds, Some(30));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.api.base_url.is_none());
        assert!(config.api.key.is_none());
        assert!(config.api.timeout_seconds.is_none());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[api\nkey =").unwrap_err();
        assert!(matches!(err, FireError::Config { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FIRE_TOML_TEST_KEY", "from-env-123");

        let toml_content = r#"
[api]
key = "${FIRE_TOML_TEST_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.key.as_deref(), Some("from-env-123"));

        std::env::remove_var("FIRE_TOML_TEST_KEY");
    }

    #[test]
    fn test_unresolved_env_var_is_kept_verbatim() {
        let toml_content = r#"
[api]
key = "${FIRE_TOML_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.api.key.as_deref(),
            Some("${FIRE_TOML_TEST_UNSET_VAR}")
        );
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
base_url = "https://api.example.com"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn test_missing_file_reports_config_error() {
        let err = TomlConfig::from_file("/nonexistent/fire.toml").unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Configuration);
        match err {
            FireError::Config { message } => {
                // 錯誤訊息要指出讀不到哪個檔案
                assert!(message.contains("/nonexistent/fire.toml"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
