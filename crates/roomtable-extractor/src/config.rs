//! Configuration for the extraction pipeline

use crate::prompt::{CONDENSE_INSTRUCTION, TABULATE_INSTRUCTION};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum chunk condensation calls in flight at once
    pub max_concurrent_requests: usize,

    /// Maximum time for a single backend call (seconds)
    pub request_timeout_secs: u64,

    /// Instruction for the per-chunk condensation calls
    #[serde(default = "default_condense_instruction")]
    pub condense_instruction: String,

    /// Instruction for the final structuring call
    #[serde(default = "default_tabulate_instruction")]
    pub tabulate_instruction: String,
}

impl PipelineConfig {
    /// Get the per-call timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrent_requests == 0 {
            return Err("max_concurrent_requests must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.condense_instruction.trim().is_empty() {
            return Err("condense_instruction must not be empty".to_string());
        }
        if self.tabulate_instruction.trim().is_empty() {
            return Err("tabulate_instruction must not be empty".to_string());
        }
        Ok(())
    }

    /// Serial preset: one call at a time, for tight backend rate limits
    pub fn serial() -> Self {
        Self {
            max_concurrent_requests: 1,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_concurrent_requests: 4,
            request_timeout_secs: 120,
            condense_instruction: default_condense_instruction(),
            tabulate_instruction: default_tabulate_instruction(),
        }
    }
}

fn default_condense_instruction() -> String {
    CONDENSE_INSTRUCTION.to_string()
}

fn default_tabulate_instruction() -> String {
    TABULATE_INSTRUCTION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serial_preset() {
        let config = PipelineConfig::serial();
        assert_eq!(config.max_concurrent_requests, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_concurrency() {
        let mut config = PipelineConfig::default();
        config.max_concurrent_requests = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = PipelineConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_instruction_is_invalid() {
        let mut config = PipelineConfig::default();
        config.condense_instruction = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_concurrent_requests, parsed.max_concurrent_requests);
        assert_eq!(config.request_timeout_secs, parsed.request_timeout_secs);
        assert_eq!(config.condense_instruction, parsed.condense_instruction);
    }

    #[test]
    fn test_toml_defaults_instructions() {
        let config = PipelineConfig::from_toml(
            "max_concurrent_requests = 2\nrequest_timeout_secs = 60\n",
        )
        .unwrap();
        assert_eq!(config.max_concurrent_requests, 2);
        assert!(!config.condense_instruction.is_empty());
        assert!(!config.tabulate_instruction.is_empty());
    }
}
