//! Module paths for addressing scopes within a configuration
//!
//! Provides [`ModulePath`] for the static path from the root module to a
//! nested module call.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::AddrError;

/// Path from the root module to a nested module
///
/// Each segment is the name of one module call. The empty path is the root
/// module.
///
/// # Examples
/// - `[]` → root module (displays as an empty string)
/// - `["network"]` → `module.network`
/// - `["network", "subnets"]` → `module.network.module.subnets`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePath(Vec<String>);

impl ModulePath {
    /// Create new path from call names
    #[inline]
    #[must_use]
    pub fn new(calls: Vec<String>) -> Self {
        Self(calls)
    }

    /// The root module
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Module call names from root to leaf
    #[inline]
    #[must_use]
    pub fn calls(&self) -> &[String] {
        &self.0
    }

    /// Nesting depth (root is 0)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the root module
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the calling module (if not root)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Name of the module call that created this module (if not root)
    #[inline]
    #[must_use]
    pub fn call_name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Path of a module called from this one
    #[inline]
    #[must_use]
    pub fn child(&self, call: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(call.into());
        new
    }

    /// Check if this module (transitively) calls `other`
    ///
    /// A module is not its own ancestor.
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.0 == other.0[..self.0.len()]
    }

    /// Iterator over call names from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for ModulePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, call) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "module.{call}")?;
        }
        Ok(())
    }
}

impl FromStr for ModulePath {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() % 2 != 0 {
            return Err(AddrError::InvalidModulePath(s.to_string()));
        }

        let calls = parts
            .chunks(2)
            .map(|pair| {
                if pair[0] != "module" {
                    return Err(AddrError::InvalidModulePath(s.to_string()));
                }
                crate::validate_name(pair[1])?;
                Ok(pair[1].to_string())
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(calls))
    }
}

impl From<Vec<String>> for ModulePath {
    fn from(calls: Vec<String>) -> Self {
        Self(calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = ModulePath::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.to_string(), "");
        assert!(root.parent().is_none());
        assert!(root.call_name().is_none());
    }

    #[test]
    fn child_and_parent() {
        let path = ModulePath::root().child("network").child("subnets");
        assert_eq!(path.calls(), &["network", "subnets"]);
        assert_eq!(path.call_name(), Some("subnets"));

        let parent = path.parent().unwrap();
        assert_eq!(parent.calls(), &["network"]);
    }

    #[test]
    fn display_uses_module_prefix() {
        let path = ModulePath::new(vec!["a".into(), "b".into()]);
        assert_eq!(path.to_string(), "module.a.module.b");
    }

    #[test]
    fn ancestor_detection() {
        let a = ModulePath::root().child("a");
        let ab = a.child("b");
        let x = ModulePath::root().child("x");

        assert!(ModulePath::root().is_ancestor_of(&a));
        assert!(a.is_ancestor_of(&ab));
        assert!(!ab.is_ancestor_of(&a));
        assert!(!a.is_ancestor_of(&a));
        assert!(!x.is_ancestor_of(&ab));
    }

    #[test]
    fn from_str_valid() {
        let path: ModulePath = "module.a.module.b_2".parse().unwrap();
        assert_eq!(path.calls(), &["a", "b_2"]);
    }

    #[test]
    fn from_str_empty_is_root() {
        let path: ModulePath = "".parse().unwrap();
        assert!(path.is_root());
    }

    #[test]
    fn from_str_rejects_missing_keyword() {
        let result: Result<ModulePath, _> = "resource.a".parse();
        assert!(matches!(result, Err(AddrError::InvalidModulePath(_))));
    }

    #[test]
    fn from_str_rejects_odd_segments() {
        let result: Result<ModulePath, _> = "module.a.module".parse();
        assert!(matches!(result, Err(AddrError::InvalidModulePath(_))));
    }

    #[test]
    fn from_str_rejects_bad_name() {
        let result: Result<ModulePath, _> = "module.9lives".parse();
        assert!(matches!(result, Err(AddrError::InvalidName(_))));
    }

    #[test]
    fn serde_is_transparent() {
        let path = ModulePath::root().child("a");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["a"]"#);
    }
}
