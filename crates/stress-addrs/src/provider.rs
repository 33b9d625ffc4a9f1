//! Provider source addresses
//!
//! Provides [`ProviderAddr`], the fully-qualified `hostname/namespace/type`
//! form used in provider requirements.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::AddrError;

/// Registry hostname assumed when a source address omits it
pub const DEFAULT_PROVIDER_HOST: &str = "registry.terraform.io";

/// Namespace assumed when a source address gives only the type
pub const DEFAULT_PROVIDER_NAMESPACE: &str = "hashicorp";

/// Fully-qualified provider source address
///
/// Parses the short forms `type` and `namespace/type` as well as the full
/// `hostname/namespace/type`, always displaying the full form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderAddr {
    hostname: String,
    namespace: String,
    type_name: String,
}

impl ProviderAddr {
    /// Create new provider address
    ///
    /// # Errors
    /// Returns error if namespace or type are not valid names
    pub fn new(
        hostname: impl Into<String>,
        namespace: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Result<Self, AddrError> {
        let hostname = hostname.into();
        let namespace = namespace.into();
        let type_name = type_name.into();

        if hostname.is_empty() || hostname.contains('/') {
            return Err(AddrError::InvalidProvider(hostname));
        }
        crate::validate_name(&namespace)?;
        crate::validate_name(&type_name)?;

        Ok(Self {
            hostname,
            namespace,
            type_name,
        })
    }

    /// Provider in the default registry under the default namespace
    ///
    /// # Errors
    /// Returns error if the type is not a valid name
    pub fn official(type_name: impl Into<String>) -> Result<Self, AddrError> {
        Self::new(DEFAULT_PROVIDER_HOST, DEFAULT_PROVIDER_NAMESPACE, type_name)
    }

    /// Registry hostname
    #[inline]
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Namespace within the registry
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Provider type (e.g. `aws`, `null`)
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Display for ProviderAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.hostname, self.namespace, self.type_name)
    }
}

impl FromStr for ProviderAddr {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [type_name] => Self::official(*type_name),
            [namespace, type_name] => Self::new(DEFAULT_PROVIDER_HOST, *namespace, *type_name),
            [hostname, namespace, type_name] => Self::new(*hostname, *namespace, *type_name),
            _ => Err(AddrError::InvalidProvider(s.to_string())),
        }
    }
}

impl TryFrom<String> for ProviderAddr {
    type Error = AddrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProviderAddr> for String {
    fn from(addr: ProviderAddr) -> Self {
        addr.to_string()
    }
}
