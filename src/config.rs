use crate::error::ConfigError;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn default_currency_symbol() -> String {
    "$".to_string()
}

/// Startup settings for the tracker shell, read from a TOML file.
///
/// ```toml
/// currency_symbol = "$"
///
/// [[available_roles]]
/// name = "Engineer"
/// rate_per_hour = 50.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub available_roles: Vec<Role>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            available_roles: Vec::new(),
        }
    }
}

impl TrackerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.available_roles.len());
        for (idx, role) in self.available_roles.iter().enumerate() {
            if role.name.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    message: format!("available role #{} requires a non-empty name", idx + 1),
                });
            }
            if !role.rate_per_hour.is_finite() {
                return Err(ConfigError::Invalid {
                    message: format!(
                        "available role '{}' has invalid rate_per_hour {}",
                        role.name, role.rate_per_hour
                    ),
                });
            }
            if !seen.insert(role.name.as_str()) {
                return Err(ConfigError::Invalid {
                    message: format!("duplicate available role '{}'", role.name),
                });
            }
        }
        Ok(())
    }
}
