use crate::utils::error::{PredictError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TomlConfig {
    #[serde(default)]
    pub model: ModelSettings,
}

/// 模型呼叫參數，全部都有預設值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelSettings {
    pub name: String,
    pub temperature: f64,
    pub seed: u64,
    pub max_tokens: u32,
    pub samples: usize,
    pub timeout_seconds: Option<u64>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: "gpt-4o".to_string(),
            temperature: 0.2,
            seed: 42,
            max_tokens: 10,
            samples: 5,
            timeout_seconds: None,
        }
    }
}

impl ModelSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PredictError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for ModelSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model.name", &self.name)?;
        validate_range("model.temperature", self.temperature, 0.0, 2.0)?;
        validate_range("model.max_tokens", self.max_tokens, 1, 4096)?;
        validate_range("model.samples", self.samples, 1, 20)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("model.timeout_seconds", timeout, 1, 600)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_str("").unwrap();
        assert_eq!(config.model, ModelSettings::default());
        assert_eq!(config.model.samples, 5);
        assert_eq!(config.model.seed, 42);
        assert!(config.model.timeout().is_none());
    }

    #[test]
    fn test_partial_override() {
        let config = TomlConfig::from_str(
            r#"
[model]
name = "gpt-4o-mini"
samples = 3
timeout_seconds = 30
"#,
        )
        .unwrap();

        assert_eq!(config.model.name, "gpt-4o-mini");
        assert_eq!(config.model.samples, 3);
        assert_eq!(config.model.timeout(), Some(Duration::from_secs(30)));
        // 未指定的欄位保留預設
        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.model.max_tokens, 10);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result = TomlConfig::from_str("[model\nname = ");
        assert!(matches!(result, Err(PredictError::TomlError(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(ModelSettings::default().validate().is_ok());

        let zero_samples = ModelSettings {
            samples: 0,
            ..ModelSettings::default()
        };
        assert!(zero_samples.validate().is_err());

        let hot = ModelSettings {
            temperature: 3.0,
            ..ModelSettings::default()
        };
        assert!(hot.validate().is_err());

        let blank_model = ModelSettings {
            name: " ".to_string(),
            ..ModelSettings::default()
        };
        assert!(blank_model.validate().is_err());
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = TomlConfig::from_file("/nonexistent/box-cac.toml");
        assert!(matches!(result, Err(PredictError::ConfigError { .. })));
    }
}
