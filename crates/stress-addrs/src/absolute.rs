//! Module-qualified declaration addresses

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::module_path::ModulePath;

/// Absolute address of an input variable declaration
///
/// Format: `var.NAME` in the root module, `module.A.var.NAME` elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AbsInputVariable {
    /// Module declaring the variable
    pub module: ModulePath,

    /// Variable name, unique within the module
    pub name: String,
}

impl AbsInputVariable {
    /// Create new variable address
    #[inline]
    #[must_use]
    pub fn new(module: ModulePath, name: impl Into<String>) -> Self {
        Self {
            module,
            name: name.into(),
        }
    }

    /// Variable declared in the root module
    #[inline]
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self::new(ModulePath::root(), name)
    }
}

impl Display for AbsInputVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.module.is_root() {
            write!(f, "var.{}", self.name)
        } else {
            write!(f, "{}.var.{}", self.module, self.name)
        }
    }
}

/// Absolute address of an output value declaration
///
/// Format: `output.NAME` in the root module, `module.A.output.NAME` elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AbsOutputValue {
    /// Module declaring the output
    pub module: ModulePath,

    /// Output name, unique within the module
    pub name: String,
}

impl AbsOutputValue {
    /// Create new output address
    #[inline]
    #[must_use]
    pub fn new(module: ModulePath, name: impl Into<String>) -> Self {
        Self {
            module,
            name: name.into(),
        }
    }

    /// Output declared in the root module
    #[inline]
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self::new(ModulePath::root(), name)
    }

    /// Only root module outputs are persisted in state
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.module.is_root()
    }
}

impl Display for AbsOutputValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.module.is_root() {
            write!(f, "output.{}", self.name)
        } else {
            write!(f, "{}.output.{}", self.module, self.name)
        }
    }
}
