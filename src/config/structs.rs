use serde::{Deserialize, Serialize};

use super::validators::{normalize_base_url, validate_config};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，示例：MS__API__BASE_URL=http://127.0.0.1:9000
pub const ENV_PREFIX: &str = "MS";

/// Application configuration
///
/// Loaded once at startup and handed to the controller and UI by value;
/// nothing reads it from global state.
///
/// 优先级：CLI 参数 > ENV > config.toml > 默认值
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shortener backend settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// List view behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    /// UI redraw tick
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl AppConfig {
    /// Load from an optional TOML file and `MS__`-prefixed environment variables
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 MS，分隔符 __
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| format!("Failed to build config: {}", e))?;

        let mut config = settings
            .try_deserialize::<AppConfig>()
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        config.finalize()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn apply_overrides(
        &mut self,
        base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<(), String> {
        if let Some(url) = base_url {
            self.api.base_url = url.to_string();
        }
        if let Some(level) = log_level {
            self.logging.level = level.to_string();
        }
        self.finalize()
    }

    /// Normalize and validate in place
    fn finalize(&mut self) -> Result<(), String> {
        self.api.base_url = normalize_base_url(&self.api.base_url);
        validate_config(self)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_refresh_interval_ms() -> u64 {
    5000
}

fn default_display_limit() -> usize {
    20
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
            display_limit: default_display_limit(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}
