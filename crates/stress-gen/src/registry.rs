//! Reference registry
//!
//! Provides [`Registry`], which coordinates references between generated
//! objects and keeps them valid across randomly generated edits.
//!
//! Many host behaviors only emerge through references between objects, so
//! the generator needs to know, at each point, which symbols it may refer to.
//! Each generated module has its own namespace and therefore its own
//! registry node; the nodes form a tree mirroring the module-call tree.
//!
//! # Visibility
//!
//! An object may only refer to targets registered in its own module's node.
//! Values cross module boundaries only through module-call arguments, which
//! the driver threads in via [`Registry::set_input_variable`] on the child.
//!
//! # Edits
//!
//! When an edit removes an object that others still refer to, the driver
//! calls [`Registry::retire_ref_target`] with a substitute expression
//! (normally a constant holding the value the target used to produce).
//! [`Registry::heal`] then rewrites references before they are emitted, so
//! previously established expected values still hold.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use hcl::Value;
use stress_addrs::{AddrError, ModulePath};

use crate::expr::ConfigExpr;
use crate::object::Variable;

/// Registry misuse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Module call names must be unique within a module
    #[error("registry already has a child module {name:?}")]
    DuplicateChild {
        /// Name that was already taken
        name: String,
    },

    /// Module call name is not a valid identifier
    #[error("invalid child module name: {0}")]
    InvalidName(#[from] AddrError),

    /// Retiring a symbol that is not a current reference target
    #[error("no reference target {key:?} to retire")]
    UnknownRefTarget {
        /// Symbol key that was not found
        key: String,
    },
}

/// Symbol table for one generated module
///
/// `Registry` is a handle: cloning it yields another handle to the same
/// node. Each node owns its children; a child only holds a weak link back to
/// its parent, used for lookups such as [`Registry::module_path`]. Handles
/// are neither `Send` nor `Sync`, so sibling modules generated concurrently
/// need independent trees.
#[derive(Debug, Clone)]
pub struct Registry {
    node: Rc<RefCell<Node>>,
}

#[derive(Debug, Default)]
struct Node {
    /// Module call name, `None` at the root
    name: Option<String>,
    parent: Weak<RefCell<Node>>,
    children: BTreeMap<String, Registry>,

    /// Candidates for references in later objects; order is irrelevant
    ref_targets: Vec<ConfigExpr>,

    /// Symbol key → expression to use in place of a removed target
    defunct_ref_targets: BTreeMap<String, ConfigExpr>,

    /// Values the caller must set for this module's variables
    input_variables: BTreeMap<String, Value>,
}

impl Registry {
    /// Create an empty registry with no parent
    #[must_use]
    pub fn new_root() -> Self {
        Self::from_node(Node::default())
    }

    fn from_node(node: Node) -> Self {
        Self {
            node: Rc::new(RefCell::new(node)),
        }
    }

    /// Create, register, and return an empty child registry
    ///
    /// The name should match the module call that implies the child.
    ///
    /// # Errors
    /// Returns error if the name is not a valid identifier or already names
    /// a child of this registry
    pub fn try_new_child(&self, name: &str) -> Result<Registry, RegistryError> {
        stress_addrs::validate_name(name)?;
        if self.node.borrow().children.contains_key(name) {
            return Err(RegistryError::DuplicateChild {
                name: name.to_string(),
            });
        }

        let child = Self::from_node(Node {
            name: Some(name.to_string()),
            parent: Rc::downgrade(&self.node),
            ..Node::default()
        });
        self.node
            .borrow_mut()
            .children
            .insert(name.to_string(), child.clone());

        tracing::debug!("Registered child module {}", child.module_path());
        Ok(child)
    }

    /// Create, register, and return an empty child registry
    ///
    /// # Panics
    /// Panics if the name is invalid or already taken. Call-site uniqueness
    /// is the driver's responsibility, so this indicates a driver bug.
    #[must_use]
    pub fn new_child(&self, name: &str) -> Registry {
        match self.try_new_child(name) {
            Ok(child) => child,
            Err(err) => panic!("{err}"),
        }
    }

    /// Enclosing module's registry, `None` at the root
    #[must_use]
    pub fn parent(&self) -> Option<Registry> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| Registry { node })
    }

    /// Child registry for a module call
    #[must_use]
    pub fn child(&self, name: &str) -> Option<Registry> {
        self.node.borrow().children.get(name).cloned()
    }

    /// Names of child module calls, sorted
    #[must_use]
    pub fn child_names(&self) -> Vec<String> {
        self.node.borrow().children.keys().cloned().collect()
    }

    /// Check if this is the root registry
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node.borrow().name.is_none()
    }

    /// Path of the module this registry belongs to
    #[must_use]
    pub fn module_path(&self) -> ModulePath {
        let mut calls = Vec::new();
        let mut current = Some(self.clone());
        while let Some(reg) = current {
            if let Some(name) = &reg.node.borrow().name {
                calls.push(name.clone());
            }
            current = reg.parent();
        }
        calls.reverse();
        ModulePath::new(calls)
    }

    /// Nesting depth (root is 0)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.module_path().depth()
    }

    /// Check if two handles refer to the same node
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Make an expression available for reference by later objects
    pub fn add_ref_target(&self, expr: ConfigExpr) {
        self.node.borrow_mut().ref_targets.push(expr);
    }

    /// Snapshot of the current reference targets
    ///
    /// The returned list does not grow when targets are added later.
    #[must_use]
    pub fn ref_targets(&self) -> Vec<ConfigExpr> {
        self.node.borrow().ref_targets.clone()
    }

    /// Remove a reference target, recording what replaces it
    ///
    /// Every registered copy of the target is removed.
    ///
    /// # Errors
    /// Returns error if no current target has the given symbol key
    pub fn retire_ref_target(&self, key: &str, substitute: ConfigExpr) -> Result<(), RegistryError> {
        let mut node = self.node.borrow_mut();
        let before = node.ref_targets.len();
        node.ref_targets.retain(|expr| expr.symbol_key().as_deref() != Some(key));
        let removed = before - node.ref_targets.len();
        if removed == 0 {
            return Err(RegistryError::UnknownRefTarget {
                key: key.to_string(),
            });
        }

        node.defunct_ref_targets.insert(key.to_string(), substitute);
        tracing::debug!("Retired reference target {} ({} registered)", key, removed);
        Ok(())
    }

    /// Substitute for a retired target
    #[must_use]
    pub fn defunct_target(&self, key: &str) -> Option<ConfigExpr> {
        self.node.borrow().defunct_ref_targets.get(key).cloned()
    }

    /// All retired targets and their substitutes
    #[must_use]
    pub fn defunct_ref_targets(&self) -> BTreeMap<String, ConfigExpr> {
        self.node.borrow().defunct_ref_targets.clone()
    }

    /// Rewrite an expression that may refer to a retired target
    ///
    /// Returns the substitute for a reference to a retired target, and an
    /// unchanged copy of anything else. The input is never modified.
    #[must_use]
    pub fn heal(&self, expr: &ConfigExpr) -> ConfigExpr {
        expr.symbol_key()
            .and_then(|key| self.defunct_target(&key))
            .unwrap_or_else(|| expr.clone())
    }

    /// Record the value the caller must supply for a variable
    ///
    /// Returns the previously recorded value, if any.
    pub fn set_input_variable(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.node
            .borrow_mut()
            .input_variables
            .insert(name.into(), value.into())
    }

    /// Value the caller must supply for a variable
    #[must_use]
    pub fn input_variable(&self, name: &str) -> Option<Value> {
        self.node.borrow().input_variables.get(name).cloned()
    }

    /// All values the caller must supply, by variable name
    #[must_use]
    pub fn input_variables(&self) -> BTreeMap<String, Value> {
        self.node.borrow().input_variables.clone()
    }

    /// Required variables of this module that have no recorded value
    ///
    /// Variables declared in other modules are ignored.
    #[must_use]
    pub fn missing_input_variables(&self, variables: &[Variable]) -> Vec<String> {
        let module = self.module_path();
        let node = self.node.borrow();
        variables
            .iter()
            .filter(|v| v.addr.module == module && v.is_required())
            .filter(|v| !node.input_variables.contains_key(&v.addr.name))
            .map(|v| v.addr.name.clone())
            .collect()
    }

    /// Root of the tree this registry belongs to
    #[must_use]
    pub fn root(&self) -> Registry {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Copy the whole tree into a fresh, independent generation
    ///
    /// Shape, reference targets, retired targets, and input variables are
    /// carried forward. Any handle in the tree may be used; the copy's root
    /// is returned.
    #[must_use]
    pub fn next_generation(&self) -> Registry {
        self.root().copy_into(Weak::new())
    }

    fn copy_into(&self, parent: Weak<RefCell<Node>>) -> Registry {
        let src = self.node.borrow();
        let copy = Self::from_node(Node {
            name: src.name.clone(),
            parent,
            children: BTreeMap::new(),
            ref_targets: src.ref_targets.clone(),
            defunct_ref_targets: src.defunct_ref_targets.clone(),
            input_variables: src.input_variables.clone(),
        });

        for (name, child) in &src.children {
            let child_copy = child.copy_into(Rc::downgrade(&copy.node));
            copy.node.borrow_mut().children.insert(name.clone(), child_copy);
        }
        copy
    }
}
