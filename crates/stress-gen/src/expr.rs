//! Expressions used as object arguments
//!
//! Provides [`ConfigExpr`], the expressions generated objects use for their
//! arguments. The model only covers expression kinds that affect the shape of
//! the dependency graph; it never evaluates anything.

use hcl::expr::{Expression, Traversal, Variable};
use hcl::Value;
use stress_addrs::RefAddr;

/// Expression appearing in a generated configuration
///
/// Every variant knows the exact value it must produce once the host has
/// finished evaluating the configuration. That value is always fully known:
/// there is no placeholder for values that would only be known after apply.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigExpr {
    /// Static literal value
    Const(Value),

    /// Reference to a symbol in the same module
    Ref {
        /// Symbol being referenced
        addr: RefAddr,
        /// Expression the referenced symbol was declared with
        target: Box<ConfigExpr>,
    },
}

impl ConfigExpr {
    /// Literal expression
    #[inline]
    #[must_use]
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Const(value.into())
    }

    /// Reference to `addr`, which is known to evaluate to `target`
    #[inline]
    #[must_use]
    pub fn reference(addr: RefAddr, target: ConfigExpr) -> Self {
        Self::Ref {
            addr,
            target: Box::new(target),
        }
    }

    /// HCL form of the expression, for direct inclusion in generated source
    #[must_use]
    pub fn build_expr(&self) -> Expression {
        match self {
            Self::Const(value) => Expression::from(value.clone()),
            Self::Ref { addr, .. } => {
                let mut builder = Traversal::builder(Variable::unchecked(addr.root_name()));
                for attr in addr.attrs() {
                    builder = builder.attr(attr);
                }
                builder.build().into()
            }
        }
    }

    /// Value the expression must hold after evaluation
    ///
    /// References resolve transitively to whatever their target produces.
    #[must_use]
    pub fn expected_value(&self) -> Value {
        match self {
            Self::Const(value) => value.clone(),
            Self::Ref { target, .. } => target.expected_value(),
        }
    }

    /// Symbol key of a reference, `None` for literals
    #[must_use]
    pub fn symbol_key(&self) -> Option<String> {
        match self {
            Self::Const(_) => None,
            Self::Ref { addr, .. } => Some(addr.to_string()),
        }
    }

    /// Check if this expression refers to another symbol
    #[inline]
    #[must_use]
    pub fn is_ref(&self) -> bool {
        matches!(self, Self::Ref { .. })
    }
}

impl From<Value> for ConfigExpr {
    fn from(value: Value) -> Self {
        Self::Const(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ConfigExpr {
        let inner = ConfigExpr::reference(
            RefAddr::input_variable("base"),
            ConfigExpr::constant("hello"),
        );
        ConfigExpr::reference(RefAddr::module_output("child", "greeting"), inner)
    }

    #[test]
    fn const_expected_value_is_verbatim() {
        let expr = ConfigExpr::constant(Value::Bool(true));
        assert_eq!(expr.expected_value(), Value::Bool(true));
    }

    #[test]
    fn const_builds_literal() {
        let expr = ConfigExpr::constant("hello");
        assert_eq!(expr.build_expr(), Expression::String("hello".into()));
    }

    #[test]
    fn ref_resolves_transitively() {
        assert_eq!(chain().expected_value(), Value::from("hello"));
    }

    #[test]
    fn ref_builds_traversal() {
        let expr = chain().build_expr();
        let rendered = hcl::format::to_string(&expr).unwrap();
        assert_eq!(rendered, "module.child.greeting");
    }

    #[test]
    fn symbol_keys() {
        assert_eq!(chain().symbol_key().as_deref(), Some("module.child.greeting"));
        assert!(ConfigExpr::constant(1).symbol_key().is_none());
    }

    #[test]
    fn is_ref() {
        assert!(chain().is_ref());
        assert!(!ConfigExpr::constant("x").is_ref());
    }
}
