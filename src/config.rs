use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Values used to build every demonstrated record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub name: String,
    pub value: i32,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            name: "test".to_string(),
            value: 123,
            color: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid_name("must not be empty"));
        }
        if self.name.contains('\n') {
            return Err(ConfigError::invalid_name("must fit on one line"));
        }
        Ok(())
    }
}
