//! Type constraints for input variables
//!
//! Provides [`TypeConstraint`] and [`type_constraint_expr`], which renders a
//! constraint as the expression accepted in a variable's `type` argument.
//! This is the type-expression flavored counterpart of turning a value into
//! a literal expression.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use hcl::expr::{Expression, FuncCall, Object, ObjectKey, Variable};
use hcl::Identifier;

/// Abstract type descriptor for a variable's type constraint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeConstraint {
    /// `string`
    String,
    /// `number`
    Number,
    /// `bool`
    Bool,
    /// `any`
    Any,
    /// `list(T)`
    List(Box<TypeConstraint>),
    /// `map(T)`
    Map(Box<TypeConstraint>),
    /// `set(T)`
    Set(Box<TypeConstraint>),
    /// `object({...})`, attributes kept in name order
    Object(BTreeMap<String, TypeConstraint>),
    /// `tuple([...])`, elements in declared order
    Tuple(Vec<TypeConstraint>),
    /// Host extension type with no constraint syntax
    Capsule(String),
}

impl TypeConstraint {
    /// `list(element)`
    #[inline]
    #[must_use]
    pub fn list(element: TypeConstraint) -> Self {
        Self::List(Box::new(element))
    }

    /// `map(element)`
    #[inline]
    #[must_use]
    pub fn map(element: TypeConstraint) -> Self {
        Self::Map(Box::new(element))
    }

    /// `set(element)`
    #[inline]
    #[must_use]
    pub fn set(element: TypeConstraint) -> Self {
        Self::Set(Box::new(element))
    }

    /// `object({...})` from attribute name/type pairs
    #[must_use]
    pub fn object<K: Into<String>>(attrs: impl IntoIterator<Item = (K, TypeConstraint)>) -> Self {
        Self::Object(attrs.into_iter().map(|(k, ty)| (k.into(), ty)).collect())
    }

    /// `tuple([...])`
    #[inline]
    #[must_use]
    pub fn tuple(elements: Vec<TypeConstraint>) -> Self {
        Self::Tuple(elements)
    }

    /// Check if this is one of the primitive types
    #[inline]
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Bool)
    }

    /// Check if this is list, map, or set
    #[inline]
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_) | Self::Set(_))
    }
}

impl Display for TypeConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Bool => f.write_str("bool"),
            Self::Any => f.write_str("any"),
            Self::List(ety) => write!(f, "list({ety})"),
            Self::Map(ety) => write!(f, "map({ety})"),
            Self::Set(ety) => write!(f, "set({ety})"),
            Self::Object(attrs) => {
                f.write_str("object({")?;
                for (i, (name, aty)) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if is_bare_key(name) {
                        write!(f, "{name} = {aty}")?;
                    } else {
                        write!(f, "{name:?} = {aty}")?;
                    }
                }
                f.write_str("})")
            }
            Self::Tuple(etys) => {
                f.write_str("tuple([")?;
                for (i, ety) in etys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ety}")?;
                }
                f.write_str("])")
            }
            Self::Capsule(name) => write!(f, "<{name}>"),
        }
    }
}

/// Render a type constraint as a type expression
///
/// # Panics
/// Panics on [`TypeConstraint::Capsule`]. Capsule types have no constraint
/// syntax, so reaching this means the generator produced a kind of
/// constraint this encoder was never taught to serialize.
#[must_use]
pub fn type_constraint_expr(ty: &TypeConstraint) -> Expression {
    match ty {
        TypeConstraint::String => keyword("string"),
        TypeConstraint::Number => keyword("number"),
        TypeConstraint::Bool => keyword("bool"),
        TypeConstraint::Any => keyword("any"),
        TypeConstraint::List(ety) => call("list", type_constraint_expr(ety)),
        TypeConstraint::Map(ety) => call("map", type_constraint_expr(ety)),
        TypeConstraint::Set(ety) => call("set", type_constraint_expr(ety)),
        TypeConstraint::Object(attrs) => {
            let object: Object<ObjectKey, Expression> = attrs
                .iter()
                .map(|(name, aty)| (attr_key(name), type_constraint_expr(aty)))
                .collect();
            call("object", Expression::Object(object))
        }
        TypeConstraint::Tuple(etys) => {
            let elements = etys.iter().map(type_constraint_expr).collect();
            call("tuple", Expression::Array(elements))
        }
        TypeConstraint::Capsule(name) => {
            panic!("unsupported type constraint kind: capsule type {name:?}")
        }
    }
}

/// Attribute names that are valid identifiers stay bare; anything else is
/// written as a quoted string so the constraint parses back.
fn attr_key(name: &str) -> ObjectKey {
    if is_bare_key(name) {
        ObjectKey::Identifier(Identifier::unchecked(name))
    } else {
        ObjectKey::Expression(Expression::String(name.to_string()))
    }
}

fn is_bare_key(name: &str) -> bool {
    const RESERVED: [&str; 6] = ["true", "false", "null", "for", "in", "if"];
    stress_addrs::validate_name(name).is_ok() && !RESERVED.contains(&name)
}

fn keyword(name: &'static str) -> Expression {
    Expression::Variable(Variable::unchecked(name))
}

fn call(name: &'static str, arg: Expression) -> Expression {
    FuncCall::builder(name).arg(arg).build().into()
}
