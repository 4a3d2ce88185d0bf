pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_secret, validate_url, Validate,
};
use clap::Parser;
use std::fmt;
use self::toml_config::{ModelSettings, TomlConfig};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// 啟動時讀取一次，之後以值的方式注入 handler
#[derive(Clone, Parser)]
#[command(name = "box-cac")]
#[command(about = "Predicts welcome box CAC through a chat completion API")]
pub struct ServerConfig {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "OPENAI_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long, env = "CAC_CONFIG", help = "TOML file with [model] overrides")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn load_model_settings(&self) -> Result<ModelSettings> {
        match &self.config {
            Some(path) => {
                tracing::info!("📄 Loading model settings from {}", path);
                Ok(TomlConfig::from_file(path)?.model)
            }
            None => Ok(ModelSettings::default()),
        }
    }
}

// api_key 不能出現在 verbose 日誌
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_secret("api_key", &self.api_key)?;
        validate_url("api_url", &self.api_url)?;
        validate_non_empty_string("host", &self.host)?;

        if let Some(path) = &self.config {
            validate_file_extensions("config", std::slice::from_ref(path), &["toml"])?;
        }

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}
