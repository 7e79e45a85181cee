//! 服务配置
//!
//! 加载顺序：配置文件（`config.toml` 或 `./config/config.toml`），
//! 找不到时使用默认值，随后用环境变量 `PORT`、`HOST`、`LOG_LEVEL`、`APP_ENV` 覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];
const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 服务配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 运行环境，决定 500 响应是否带错误详情
    pub environment: Environment,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
    #[error("环境变量 {name} 无效: {value}")]
    InvalidOverride { name: &'static str, value: String },
}

impl Config {
    /// 从文件或默认值加载配置，并应用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
            Some(path) => {
                println!("从配置文件加载: {}", path);
                Self::load_from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 用 `lookup` 提供的变量覆盖配置，测试时可以传入自定义查找函数
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.http.port = port.trim().parse().map_err(|_| ConfigError::InvalidOverride {
                name: "PORT",
                value: port.clone(),
            })?;
        }

        if let Some(host) = lookup("HOST") {
            self.http.bind_address = host;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level.trim().to_ascii_lowercase();
        }

        if let Some(env) = lookup("APP_ENV") {
            self.environment = Environment::parse(&env).ok_or(ConfigError::InvalidOverride {
                name: "APP_ENV",
                value: env.clone(),
            })?;
        }

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, VALID_LEVELS
            )));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
        assert!(config.environment.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = Config::default();
        config.http.bind_address.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[
                ("PORT", "8081"),
                ("LOG_LEVEL", "DEBUG"),
                ("APP_ENV", "development"),
            ]))
            .unwrap();

        assert_eq!(config.http.port, 8081);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.socket_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = Config::default();
        let err = config.apply_overrides(lookup(&[("PORT", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverride { name: "PORT", .. }));
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            environment = "development"

            [http]
            port = 4000
            "#,
        )
        .unwrap();

        assert_eq!(config.http.port, 4000);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.http.port, 3000);

        assert!(matches!(
            Config::load_from_file(dir.path().join("missing.toml")),
            Err(ConfigError::FileRead(_))
        ));
    }
}
