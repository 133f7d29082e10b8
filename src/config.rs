//! Engine configuration
//!
//! A small tunable surface, immutable once an engine is constructed.
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use palette_forge::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{canvas, quantize, selection};
use crate::error::{ExtractionError, Result};

/// Tunables for the extraction engine.
///
/// Can be serialized to/from JSON for reproducible extraction runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Quantization bucket size; channel values are floored to
    /// multiples of this. Smaller values yield finer, more numerous
    /// clusters; larger values merge more aggressively.
    pub bucket_size: u32,

    /// Number of dominant colors to select per image
    pub max_colors: usize,

    /// Edge of the square sampling canvas in pixels
    pub canvas_size: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bucket_size: quantize::DEFAULT_BUCKET_SIZE,
            max_colors: selection::DEFAULT_MAX_COLORS,
            canvas_size: canvas::DEFAULT_SIZE,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` for any zero-valued
    /// field. This is the engine's only fatal failure path.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_size == 0 {
            return Err(ExtractionError::config("bucket_size", self.bucket_size));
        }
        if self.max_colors == 0 {
            return Err(ExtractionError::config("max_colors", self.max_colors));
        }
        if self.canvas_size == 0 {
            return Err(ExtractionError::config("canvas_size", self.canvas_size));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_bucket_size_rejected() {
        let config = EngineConfig {
            bucket_size: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExtractionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_zero_max_colors_rejected() {
        let config = EngineConfig {
            max_colors: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig {
            bucket_size: 8,
            max_colors: 6,
            canvas_size: 50,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: EngineConfig = serde_json::from_str(r#"{"bucket_size": 32}"#).unwrap();
        assert_eq!(parsed.bucket_size, 32);
        assert_eq!(parsed.max_colors, selection::DEFAULT_MAX_COLORS);
    }
}
