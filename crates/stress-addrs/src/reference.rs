//! Referenceable symbols
//!
//! Provides [`RefAddr`] for symbols that an expression inside a module can
//! refer to. Unlike [`AbsInputVariable`](crate::AbsInputVariable) these are
//! relative to the module containing the reference.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::AddrError;

/// Symbol visible to expressions within one module
///
/// The display form doubles as the symbol key for reference bookkeeping.
///
/// # Example
/// ```
/// use stress_addrs::RefAddr;
///
/// let var = RefAddr::input_variable("region");
/// assert_eq!(var.to_string(), "var.region");
///
/// let out = RefAddr::module_output("network", "vpc_id");
/// assert_eq!(out.to_string(), "module.network.vpc_id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RefAddr {
    /// `var.NAME`
    InputVariable {
        /// Variable name
        name: String,
    },

    /// `module.CALL.NAME`
    ModuleCallOutput {
        /// Module call name
        call: String,
        /// Output name within the called module
        name: String,
    },
}

impl RefAddr {
    /// Reference to an input variable of the current module
    #[inline]
    #[must_use]
    pub fn input_variable(name: impl Into<String>) -> Self {
        Self::InputVariable { name: name.into() }
    }

    /// Reference to an output of a module called from the current module
    #[inline]
    #[must_use]
    pub fn module_output(call: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ModuleCallOutput {
            call: call.into(),
            name: name.into(),
        }
    }

    /// Root name of the traversal (`var` or `module`)
    #[inline]
    #[must_use]
    pub fn root_name(&self) -> &'static str {
        match self {
            Self::InputVariable { .. } => "var",
            Self::ModuleCallOutput { .. } => "module",
        }
    }

    /// Attribute names following the root name
    #[must_use]
    pub fn attrs(&self) -> Vec<&str> {
        match self {
            Self::InputVariable { name } => vec![name.as_str()],
            Self::ModuleCallOutput { call, name } => vec![call.as_str(), name.as_str()],
        }
    }
}

impl Display for RefAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputVariable { name } => write!(f, "var.{name}"),
            Self::ModuleCallOutput { call, name } => write!(f, "module.{call}.{name}"),
        }
    }
}

impl FromStr for RefAddr {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            ["var", name] => {
                crate::validate_name(name)?;
                Ok(Self::input_variable(*name))
            }
            ["module", call, name] => {
                crate::validate_name(call)?;
                crate::validate_name(name)?;
                Ok(Self::module_output(*call, *name))
            }
            _ => Err(AddrError::InvalidName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_variable_parts() {
        let addr = RefAddr::input_variable("region");
        assert_eq!(addr.root_name(), "var");
        assert_eq!(addr.attrs(), vec!["region"]);
    }

    #[test]
    fn module_output_parts() {
        let addr = RefAddr::module_output("net", "id");
        assert_eq!(addr.root_name(), "module");
        assert_eq!(addr.attrs(), vec!["net", "id"]);
    }

    #[test]
    fn parse_symbol_keys() {
        let var: RefAddr = "var.region".parse().unwrap();
        assert_eq!(var, RefAddr::input_variable("region"));

        let out: RefAddr = "module.net.id".parse().unwrap();
        assert_eq!(out, RefAddr::module_output("net", "id"));
    }

    #[test]
    fn parse_rejects_unknown_roots() {
        assert!("local.x".parse::<RefAddr>().is_err());
        assert!("var".parse::<RefAddr>().is_err());
        assert!("module.net".parse::<RefAddr>().is_err());
    }
}
