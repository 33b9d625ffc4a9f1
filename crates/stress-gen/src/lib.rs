//! Stress-test Configuration Generator
//!
//! Building blocks for randomized configuration tests: generate a module out
//! of composable objects, let the host evaluate it, then check the resulting
//! state against values predicted up front.
//!
//! # Core Concepts
//!
//! - [`ConfigExpr`]: Expressions with a fully-known expected value
//! - [`ConfigObject`]: Blocks in a generated module that can check the state
//! - [`TypeConstraint`]: Variable type constraints and their encoding
//! - [`Registry`]: Per-module symbol tables tracking reference targets
//! - [`generate_config_file`]: Serializes an ordered object list
//! - [`StateChecker`]: Verifies a [`State`] snapshot against the objects
//!
//! # Example
//!
//! ```rust,ignore
//! use stress_gen::prelude::*;
//! use stress_addrs::{AbsInputVariable, AbsOutputValue, RefAddr};
//!
//! let registry = Registry::new_root();
//! let var = Variable::new(AbsInputVariable::root("name"));
//! registry.set_input_variable("name", "hello");
//! registry.add_ref_target(ConfigExpr::reference(
//!     RefAddr::input_variable("name"),
//!     ConfigExpr::constant("hello"),
//! ));
//!
//! let value = registry.ref_targets().remove(0);
//! let objects: Vec<ConfigObject> = vec![
//!     var.into(),
//!     Output::new(AbsOutputValue::root("name"), value).into(),
//! ];
//!
//! let file = generate_config_file(&objects)?;
//! // ... host evaluates `file` with var.name = "hello" ...
//! let report = StateChecker::new(&state).check(&objects);
//! assert!(report.is_success());
//! ```

#![warn(missing_docs)]

pub mod check;
pub mod error;
pub mod expr;
pub mod generate;
pub mod object;
pub mod registry;
pub mod settings;
pub mod state;
pub mod types;

// Re-exports
pub use check::{check_state, CheckError, CheckReport, ObjectFindings, Observed, StateChecker};
pub use error::{GenerateError, SettingsError, StateError};
pub use expr::ConfigExpr;
pub use generate::generate_config_file;
pub use object::{Boilerplate, ConfigObject, FileBody, Output, Variable};
pub use registry::{Registry, RegistryError};
pub use settings::StressSettings;
pub use state::{OutputValueState, State};
pub use types::{type_constraint_expr, TypeConstraint};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for generating and checking configurations
    pub use crate::{
        generate_config_file, Boilerplate, CheckError, ConfigExpr, ConfigObject, Output, Registry,
        State, StateChecker, TypeConstraint, Variable,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
