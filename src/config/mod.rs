pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

/// 24fire 正式環境的 API 位址
pub const DEFAULT_API_BASE: &str = "https://manage.24fire.de/api";
/// 未指定 --config 時嘗試載入的設定檔
const DEFAULT_CONFIG_FILE: &str = "fire.toml";
const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fire-cli")]
#[command(about = "Interactive viewer for 24fire account services")]
pub struct CliConfig {
    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long, env = "FIRE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "Path to a fire.toml config file")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併 CLI 參數、fire.toml 與內建預設後的有效配置
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub no_color: bool,
    pub verbose: bool,
}

impl Settings {
    /// 讀入設定檔（若存在）並與 CLI 參數合併
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    tracing::debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
                    Some(TomlConfig::from_file(default_path)?)
                } else {
                    None
                }
            }
        };

        Ok(Self::merge(cli, file_config))
    }

    /// 合併優先序：CLI 參數 > 設定檔 > 預設值
    pub fn merge(cli: CliConfig, file_config: Option<TomlConfig>) -> Self {
        let file_api = file_config.map(|config| config.api).unwrap_or_default();

        Self {
            api_url: cli
                .api_url
                .or(file_api.base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_key: cli.api_key.or(file_api.key),
            timeout_seconds: cli
                .timeout_seconds
                .or(file_api.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            no_color: cli.no_color,
            verbose: cli.verbose,
        }
    }
}

impl ConfigProvider for Settings {
    fn api_base(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
