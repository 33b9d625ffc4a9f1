//! Input variable declarations

use hcl::{Attribute, Block, Expression, Value};
use stress_addrs::AbsInputVariable;

use super::FileBody;
use crate::check::CheckError;
use crate::state::State;
use crate::types::{type_constraint_expr, TypeConstraint};

/// Declaration of an input variable
///
/// A variable without a default is required: the driver must record a value
/// for it in the declaring module's
/// [`Registry::set_input_variable`](crate::Registry::set_input_variable).
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Address of the declaration
    pub addr: AbsInputVariable,

    /// Optional `type` argument
    pub type_constraint: Option<TypeConstraint>,

    /// Optional `default` argument
    pub default_value: Option<Value>,
}

impl Variable {
    /// Declaration with neither type constraint nor default
    #[inline]
    #[must_use]
    pub fn new(addr: AbsInputVariable) -> Self {
        Self {
            addr,
            type_constraint: None,
            default_value: None,
        }
    }

    /// With type constraint
    #[inline]
    #[must_use]
    pub fn with_type_constraint(mut self, ty: TypeConstraint) -> Self {
        self.type_constraint = Some(ty);
        self
    }

    /// With default value
    #[inline]
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Check if callers must supply a value
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.default_value.is_none()
    }

    pub(crate) fn display_name(&self) -> String {
        self.addr.to_string()
    }

    pub(crate) fn append_config(&self, to: &mut FileBody) {
        let mut builder = Block::builder("variable").add_label(self.addr.name.as_str());
        if let Some(ty) = &self.type_constraint {
            builder = builder.add_attribute(Attribute::new("type", type_constraint_expr(ty)));
        }
        if let Some(default) = &self.default_value {
            builder = builder.add_attribute(Attribute::new("default", Expression::from(default.clone())));
        }
        to.append_block(builder.build());
    }

    pub(crate) fn check_state(&self, _state: &State) -> Vec<CheckError> {
        // Variables are not persisted in state. They exist only so that
        // other objects can refer to them.
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stress_addrs::ModulePath;

    fn render(v: &Variable) -> String {
        let mut body = FileBody::new();
        v.append_config(&mut body);
        hcl::to_string(&body.into_body()).unwrap()
    }

    #[test]
    fn bare_declaration() {
        let text = render(&Variable::new(AbsInputVariable::root("region")));
        assert_eq!(text.trim(), r#"variable "region" {}"#);
    }

    #[test]
    fn type_clause_only_when_set() {
        let v = Variable::new(AbsInputVariable::root("names"))
            .with_type_constraint(TypeConstraint::list(TypeConstraint::String));
        let text = render(&v);

        assert!(text.contains("type = list(string)"));
        assert!(!text.contains("default"));
    }

    #[test]
    fn default_clause_only_when_set() {
        let v = Variable::new(AbsInputVariable::root("greeting")).with_default("hello");
        let text = render(&v);

        assert!(text.contains(r#"default = "hello""#));
        assert!(!text.contains("type"));
    }

    #[test]
    fn label_is_local_name_in_nested_module() {
        let addr = AbsInputVariable::new(ModulePath::root().child("child"), "count");
        let text = render(&Variable::new(addr));
        assert!(text.starts_with(r#"variable "count""#));
    }

    #[test]
    fn required_without_default() {
        let v = Variable::new(AbsInputVariable::root("x"));
        assert!(v.is_required());
        assert!(!v.with_default(Value::Bool(false)).is_required());
    }
}
