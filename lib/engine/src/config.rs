//! Engine configuration, loadable from a YAML file.
//!
//! Every field has a default so a missing or sparse config file still yields
//! a working setup. Thresholds and weights live in
//! [`CompareConfig`](reqdelta_core::CompareConfig) and are passed explicitly
//! into the classifier; nothing reads process-wide state.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use reqdelta_core::CompareConfig;
use reqdelta_providers::{OpenAiConfig, RetryPolicy};

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub llm: LlmConfig,
    pub compare: CompareConfig,
    pub retry: RetryConfig,
    pub report: ReportConfig,
}

impl EngineConfig {
    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;

        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    /// Environment variable holding the API key; never the key itself
    pub api_key_env: String,
    pub model: String,
    pub embedding_model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-4".to_string(),
            embedding_model: "text-embedding-ada-002".to_string(),
            temperature: 0.3,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    /// Resolve into a client config, reading the API key from the
    /// environment.
    #[must_use]
    pub fn to_openai(&self) -> OpenAiConfig {
        let api_key = std::env::var(&self.api_key_env).ok();
        if api_key.is_none() {
            warn!(var = %self.api_key_env, "API key not set in environment");
        }
        OpenAiConfig {
            base_url: self.base_url.clone(),
            api_key,
            model: self.model.clone(),
            embedding_model: self.embedding_model.clone(),
            temperature: self.temperature,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay: Duration::from_millis(self.base_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: String,
    pub include_recommendations: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: "outputs/comparison_reports".to_string(),
            include_recommendations: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load(Path::new("/nonexistent/config.yaml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults_elsewhere() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "compare:\n  similar_threshold: 0.6\nllm:\n  model: gpt-4o"
        )
        .unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.compare.similar_threshold, 0.6);
        assert_eq!(config.compare.exact_threshold, 0.95);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "compare: [not, a, map").unwrap();
        assert!(matches!(
            EngineConfig::load(file.path()),
            Err(EngineError::Config(_))
        ));
    }
}
