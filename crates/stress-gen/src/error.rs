//! Error types for stress-gen
//!
//! These cover failures outside the generated configuration itself:
//! - Serializing a file body
//! - Loading a state snapshot
//! - Loading harness settings
//!
//! Mismatches between state and configuration are [`CheckError`]s and are
//! collected, never raised. Registry misuse is a [`RegistryError`].
//!
//! [`CheckError`]: crate::CheckError
//! [`RegistryError`]: crate::RegistryError

use stress_addrs::AddrError;

/// Config file generation errors
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The HCL formatter rejected the body
    #[error("failed to format configuration: {0}")]
    Format(#[from] hcl::Error),
}

/// State snapshot errors
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Snapshot is not valid JSON in the expected shape
    #[error("invalid state JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Harness settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Settings are not valid TOML in the expected shape
    #[error("invalid settings TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// A provider source address could not be parsed
    #[error("provider {local_name:?}: {source}")]
    InvalidProvider {
        /// Local name the address was configured under
        local_name: String,
        /// Parse failure
        source: AddrError,
    },

    /// A value is out of range
    #[error("invalid setting {name}: {reason}")]
    InvalidValue {
        /// Setting name
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
