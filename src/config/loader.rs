//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "NOVELIST_CONFIG";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `NOVELIST_`，层级分隔符 `__`）
/// 2. 配置文件（`NOVELIST_CONFIG` 指定的文件，否则 config.toml / config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `NOVELIST_LLM__API_KEY=sk-...`
/// - `NOVELIST_LLM__BASE_URL=https://api.deepseek.com/v1`
/// - `NOVELIST_LLM__MODEL=deepseek-chat`
/// - `NOVELIST_WRITING__TARGET_WORD_COUNT=3000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    load_config_from_path(explicit.as_deref())
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级），角色表由 serde 默认值提供
    builder = builder
        .set_default("llm.base_url", "https://api.deepseek.com/v1")?
        .set_default("llm.model", "deepseek-chat")?
        .set_default("llm.temperature", 0.7)?
        .set_default("llm.timeout_secs", 0)?
        .set_default("writing.default_chapter_count", 5)?
        .set_default("writing.target_word_count", 2000)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: NOVELIST_LLM__API_KEY=sk-xxx
    builder = builder.add_source(
        Environment::with_prefix("NOVELIST")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let has_key = config
        .llm
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());
    if !has_key {
        return Err(ConfigError::ValidationError(
            "LLM API key is not set (use NOVELIST_LLM__API_KEY or llm.api_key)".to_string(),
        ));
    }

    if config.llm.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL cannot be empty".to_string(),
        ));
    }

    if config.llm.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM model cannot be empty".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&config.llm.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "LLM temperature must be within 0.0..=2.0, got {}",
            config.llm.temperature
        )));
    }

    if config.writing.target_word_count == 0 {
        return Err(ConfigError::ValidationError(
            "Target word count cannot be 0".to_string(),
        ));
    }

    config
        .writing
        .writing_settings()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("LLM Base URL: {}", config.llm.base_url);
    tracing::info!("LLM API Key: {}", config.llm.masked_api_key());
    tracing::info!("LLM Model: {}", config.llm.model);
    tracing::info!("LLM Temperature: {}", config.llm.temperature);
    if config.llm.timeout_secs > 0 {
        tracing::info!("LLM Timeout: {}s", config.llm.timeout_secs);
    }
    tracing::info!("Default Chapter Count: {}", config.writing.default_chapter_count);
    tracing::info!("Target Word Count: {}", config.writing.target_word_count);
    tracing::info!("Characters: {}", config.writing.characters.len());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("sk-test".to_string());
        config
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_err());

        let mut blank = valid_config();
        blank.llm.api_key = Some("  ".to_string());
        assert!(validate_config(&blank).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_temperature() {
        let mut config = valid_config();
        config.llm.temperature = 3.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_word_count() {
        let mut config = valid_config();
        config.writing.target_word_count = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_model() {
        let mut config = valid_config();
        config.llm.model = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[llm]
api_key = "sk-from-file"
model = "deepseek-reasoner"
temperature = 0.25

[writing]
target_word_count = 1200

[[writing.characters]]
name = "林舟"
description = "星舰领航员"
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.llm.model, "deepseek-reasoner");
        assert_eq!(config.llm.temperature, 0.25);
        assert_eq!(config.writing.target_word_count, 1200);
        assert_eq!(config.writing.default_chapter_count, 5);
        assert_eq!(config.writing.characters.len(), 1);
        assert_eq!(config.writing.characters[0].name, "林舟");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/novelist.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
