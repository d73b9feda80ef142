//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, ProviderKind};

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

/// 服务方通用的凭据环境变量，作为 `provider.api_key` 的默认值
const PROVIDER_KEY_ENV: &str = "OPENAI_API_KEY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TTS_RELAY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TTS_RELAY_SERVER__PORT=8080`
/// - `TTS_RELAY_PROVIDER__KIND=fake`
/// - `TTS_RELAY_PROVIDER__BASE_URL=http://localhost:8880`
/// - `OPENAI_API_KEY=sk-...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    let api_key = std::env::var(PROVIDER_KEY_ENV).unwrap_or_default();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "web")?
        .set_default("server.static_files.path", "/")?
        .set_default("provider.kind", "openai")?
        .set_default("provider.base_url", "https://api.openai.com")?
        .set_default("provider.api_key", api_key)?
        .set_default("provider.model", "tts-1-hd")?
        .set_default("provider.voice", "alloy")?
        .set_default("provider.timeout_secs", 600)?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: TTS_RELAY_PROVIDER__MODEL=tts-1
    builder = builder.add_source(
        Environment::with_prefix("TTS_RELAY")
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
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.provider.model.is_empty() || config.provider.voice.is_empty() {
        return Err(ConfigError::ValidationError(
            "Provider model and voice cannot be empty".to_string(),
        ));
    }

    if config.provider.kind == ProviderKind::OpenAi {
        if config.provider.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "Provider base URL cannot be empty".to_string(),
            ));
        }
        if config.provider.api_key.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Provider API key is missing (set {} or TTS_RELAY_PROVIDER__API_KEY)",
                PROVIDER_KEY_ENV
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} at {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    tracing::info!("Provider: {}", config.provider.kind);
    if config.provider.kind == ProviderKind::OpenAi {
        tracing::info!("Provider URL: {}", config.provider.base_url);
        tracing::info!(
            "Provider API Key: {}",
            if config.provider.api_key.is_empty() { "missing" } else { "configured" }
        );
    }
    tracing::info!("Model / Voice: {} / {}", config.provider.model, config.provider.voice);
    tracing::info!("Provider Timeout: {}s", config.provider.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.provider.api_key = "sk-test".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let mut config = valid_config();
        config.provider.api_key = String::new();
        assert!(validate_config(&config).is_err());

        // fake 模式不需要 key
        config.provider.kind = ProviderKind::Fake;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_voice() {
        let mut config = valid_config();
        config.provider.voice = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 4100

[provider]
kind = "fake"
voice = "nova"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.provider.kind, ProviderKind::Fake);
        assert_eq!(config.provider.voice, "nova");
        assert_eq!(config.provider.model, "tts-1-hd");
    }
}
