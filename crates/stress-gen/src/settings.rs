//! Harness settings
//!
//! Provides [`StressSettings`], the defaults a driver uses when assembling
//! generated modules. Settings load from TOML:
//!
//! ```toml
//! config_file_name = "main.tf"
//! max_module_depth = 3
//!
//! [providers]
//! null = "hashicorp/null"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stress_addrs::ProviderAddr;

use crate::error::SettingsError;
use crate::object::Boilerplate;

/// Settings shared by every generated module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressSettings {
    /// Provider local name → source address, required by every module
    pub providers: BTreeMap<String, String>,

    /// Name of the file each module's configuration is written to
    pub config_file_name: String,

    /// Maximum nesting of module calls
    pub max_module_depth: usize,
}

impl StressSettings {
    /// Create default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML, filling unset fields with defaults
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or a value is out of range
    pub fn from_toml(toml_str: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// With an additional provider requirement
    #[inline]
    #[must_use]
    pub fn with_provider(mut self, local_name: impl Into<String>, source: impl Into<String>) -> Self {
        self.providers.insert(local_name.into(), source.into());
        self
    }

    /// With config file name
    #[inline]
    #[must_use]
    pub fn with_config_file_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }

    /// Check if a module nested `depth` calls below the root may be generated
    #[inline]
    #[must_use]
    pub fn allows_depth(&self, depth: usize) -> bool {
        depth <= self.max_module_depth
    }

    /// Check values that serde cannot
    ///
    /// # Errors
    /// Returns error for an empty file name, a zero depth limit, or an
    /// unparsable provider address
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.config_file_name.is_empty() {
            return Err(SettingsError::InvalidValue {
                name: "config_file_name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.max_module_depth == 0 {
            return Err(SettingsError::InvalidValue {
                name: "max_module_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        self.provider_addrs().map(|_| ())
    }

    /// Parsed provider addresses, by local name
    ///
    /// # Errors
    /// Returns error naming the first provider whose address is invalid
    pub fn provider_addrs(&self) -> Result<BTreeMap<String, ProviderAddr>, SettingsError> {
        self.providers
            .iter()
            .map(|(local_name, source)| {
                source
                    .parse::<ProviderAddr>()
                    .map(|addr| (local_name.clone(), addr))
                    .map_err(|source| SettingsError::InvalidProvider {
                        local_name: local_name.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Boilerplate object requiring the configured providers
    ///
    /// # Errors
    /// Returns error if a provider address is invalid
    pub fn boilerplate(&self) -> Result<Boilerplate, SettingsError> {
        Ok(Boilerplate {
            providers: self.provider_addrs()?,
        })
    }
}

impl Default for StressSettings {
    fn default() -> Self {
        Self {
            providers: BTreeMap::from([("null".to_string(), "hashicorp/null".to_string())]),
            config_file_name: "main.tf".to_string(),
            max_module_depth: 3,
        }
    }
}
