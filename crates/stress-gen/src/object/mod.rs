//! Configuration objects
//!
//! A [`ConfigObject`] is one item in a generated module, typically a single
//! configuration block. Each object has a few responsibilities:
//!
//! - generate its configuration blocks ([`ConfigObject::append_config`])
//! - verify that the final state matches what it declared
//!   ([`ConfigObject::check_state`])
//! - name itself for reporting ([`ConfigObject::display_name`])
//!
//! Objects also make symbols available to later objects through the
//! [`Registry`](crate::Registry), which the driver updates as it generates
//! them.

mod boilerplate;
mod output;
mod variable;

pub use boilerplate::Boilerplate;
pub use output::Output;
pub use variable::Variable;

use hcl::{Block, Body};

use crate::check::CheckError;
use crate::state::State;

/// Item that can be included in a generated configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigObject {
    /// Provider requirements and other module scaffolding
    Boilerplate(Boilerplate),
    /// Input variable declaration
    Variable(Variable),
    /// Output value declaration
    Output(Output),
}

impl ConfigObject {
    /// Identifier for reporting
    ///
    /// Not necessarily unique across a configuration, but as unique as the
    /// object allows. Objects with absolute addresses use those.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Boilerplate(bp) => bp.display_name(),
            Self::Variable(v) => v.display_name(),
            Self::Output(o) => o.display_name(),
        }
    }

    /// Append this object's blocks to a file body
    pub fn append_config(&self, to: &mut FileBody) {
        match self {
            Self::Boilerplate(bp) => bp.append_config(to),
            Self::Variable(v) => v.append_config(to),
            Self::Output(o) => o.append_config(to),
        }
    }

    /// Compare the state with what this object declared
    ///
    /// Returns every mismatch found; an empty list means the object checks
    /// out.
    #[must_use]
    pub fn check_state(&self, state: &State) -> Vec<CheckError> {
        match self {
            Self::Boilerplate(bp) => bp.check_state(state),
            Self::Variable(v) => v.check_state(state),
            Self::Output(o) => o.check_state(state),
        }
    }
}

impl From<Boilerplate> for ConfigObject {
    fn from(bp: Boilerplate) -> Self {
        Self::Boilerplate(bp)
    }
}

impl From<Variable> for ConfigObject {
    fn from(v: Variable) -> Self {
        Self::Variable(v)
    }
}

impl From<Output> for ConfigObject {
    fn from(o: Output) -> Self {
        Self::Output(o)
    }
}

/// Top-level body of one generated configuration file
///
/// Blocks are kept in the order they were appended.
#[derive(Debug, Clone, Default)]
pub struct FileBody {
    blocks: Vec<Block>,
}

impl FileBody {
    /// Create empty body
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level block
    #[inline]
    pub fn append_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Blocks appended so far
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of top-level blocks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if nothing was appended
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Convert into an HCL body for formatting
    #[must_use]
    pub fn into_body(self) -> Body {
        self.blocks
            .into_iter()
            .fold(Body::builder(), |builder, block| builder.add_block(block))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ConfigExpr;
    use stress_addrs::{AbsInputVariable, AbsOutputValue};

    #[test]
    fn display_names() {
        let bp: ConfigObject = Boilerplate::new().into();
        let var: ConfigObject = Variable::new(AbsInputVariable::root("region")).into();
        let out: ConfigObject =
            Output::new(AbsOutputValue::root("id"), ConfigExpr::constant("x")).into();

        assert_eq!(bp.display_name(), "module boilerplate");
        assert_eq!(var.display_name(), "var.region");
        assert_eq!(out.display_name(), "output.id");
    }

    #[test]
    fn file_body_keeps_append_order() {
        let mut body = FileBody::new();
        assert!(body.is_empty());

        Variable::new(AbsInputVariable::root("a")).append_config(&mut body);
        Output::new(AbsOutputValue::root("b"), ConfigExpr::constant(1)).append_config(&mut body);

        assert_eq!(body.len(), 2);
        assert_eq!(body.blocks()[0].identifier(), "variable");
        assert_eq!(body.blocks()[1].identifier(), "output");
    }

    #[test]
    fn declaration_only_objects_never_fail_checks() {
        let state = State::new();
        let bp: ConfigObject = Boilerplate::new().into();
        let var: ConfigObject = Variable::new(AbsInputVariable::root("region")).into();

        assert!(bp.check_state(&state).is_empty());
        assert!(var.check_state(&state).is_empty());
    }
}
