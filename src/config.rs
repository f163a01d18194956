use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NotaError, Result};
use crate::export::DEFAULT_EXPORT_FILE;
use crate::store::DEFAULT_NOTES_DIR;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the note keeper, stored as `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotasConfig {
    /// Directory the notes live in.
    #[serde(default = "default_notes_dir")]
    pub notes_dir: String,

    /// File the JSON export is written to.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_notes_dir() -> String {
    DEFAULT_NOTES_DIR.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for NotasConfig {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            export_file: default_export_file(),
        }
    }
}

impl NotasConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotaError::Io)?;
        let config: NotasConfig =
            serde_json::from_str(&content).map_err(NotaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotaError::Serialization)?;
        fs::write(config_path, content).map_err(NotaError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotasConfig::default();
        assert_eq!(config.notes_dir, "notas");
        assert_eq!(config.export_file, "notas.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = NotasConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, NotasConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let config = NotasConfig {
            notes_dir: "my_notes".to_string(),
            export_file: "out.json".to_string(),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = NotasConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: NotasConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, NotasConfig::default());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = NotasConfig {
            notes_dir: "elsewhere".to_string(),
            export_file: "dump.json".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: NotasConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
