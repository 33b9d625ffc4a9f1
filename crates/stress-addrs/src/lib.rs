//! Stress-test Addresses
//!
//! Absolute addresses for the objects that appear in generated configurations.
//!
//! # Overview
//!
//! - **ModulePath**: path of module calls from the root module
//! - **AbsInputVariable** / **AbsOutputValue**: module-qualified declarations
//! - **ProviderAddr**: fully-qualified provider source address
//! - **RefAddr**: a symbol that an expression inside one module can refer to
//!
//! # Example
//!
//! ```rust
//! use stress_addrs::{AbsOutputValue, ModulePath, ProviderAddr};
//!
//! let output = AbsOutputValue::new(ModulePath::root().child("net"), "id");
//! assert_eq!(output.to_string(), "module.net.output.id");
//!
//! let provider: ProviderAddr = "hashicorp/aws".parse().unwrap();
//! assert_eq!(provider.to_string(), "registry.terraform.io/hashicorp/aws");
//! ```

#![warn(missing_docs)]

mod absolute;
mod module_path;
mod provider;
mod reference;

// Re-exports
pub use absolute::{AbsInputVariable, AbsOutputValue};
pub use module_path::ModulePath;
pub use provider::{ProviderAddr, DEFAULT_PROVIDER_HOST, DEFAULT_PROVIDER_NAMESPACE};
pub use reference::RefAddr;

/// Errors for address parsing and validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    /// Name is not a valid identifier
    #[error("invalid name: {0:?} (must start with a letter or underscore)")]
    InvalidName(String),

    /// Module path does not follow `module.NAME` pairs
    #[error("invalid module path: {0}")]
    InvalidModulePath(String),

    /// Provider source address has the wrong shape
    #[error("invalid provider source address: {0}")]
    InvalidProvider(String),
}

/// Check that a name is a valid identifier
///
/// # Errors
/// Returns [`AddrError::InvalidName`] if the name is empty, starts with a
/// digit or dash, or contains characters other than letters, digits,
/// underscores, and dashes.
pub fn validate_name(name: &str) -> Result<(), AddrError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(AddrError::InvalidName(name.to_string()))
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
