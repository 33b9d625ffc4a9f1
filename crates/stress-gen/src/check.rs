//! State verification
//!
//! Provides [`CheckError`] for individual findings and [`StateChecker`],
//! which runs every object's check against a state snapshot and collects the
//! results so a whole configuration can be reported at once.

use std::fmt::{self, Display, Formatter};

use hcl::Value;
use stress_addrs::AbsOutputValue;

use crate::object::ConfigObject;
use crate::state::State;

/// One observed or expected quantity in a mismatch
#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    /// A value from the host's value model
    Value(Value),
    /// A boolean flag, such as sensitivity
    Flag(bool),
}

impl Display for Observed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => match serde_json::to_string(value) {
                Ok(json) => f.write_str(&json),
                Err(_) => write!(f, "{value:?}"),
            },
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// Finding from comparing the state with a configuration object
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    /// A root module output is missing from the state
    #[error("root module output value {} is not tracked in the state", .addr.name)]
    NotTracked {
        /// Output that was expected
        addr: AbsOutputValue,
    },

    /// Something in the state differs from what was configured
    #[error("{message}: got {got}, want {want}")]
    Unexpected {
        /// Human-readable description
        message: String,
        /// What the state holds
        got: Observed,
        /// What the configuration predicted
        want: Observed,
    },
}

impl CheckError {
    /// Check if this is a value mismatch rather than a missing record
    #[inline]
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Unexpected { .. })
    }
}

/// Errors found for one object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectFindings {
    /// [`ConfigObject::display_name`] of the object
    pub object: String,
    /// Errors, in the order the object reported them
    pub errors: Vec<CheckError>,
}

/// Aggregate outcome of checking a configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Number of objects checked
    pub objects_checked: usize,
    /// Objects with at least one error, in input order
    pub findings: Vec<ObjectFindings>,
}

impl CheckReport {
    /// Check if every object matched the state
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    /// Total number of errors across all objects
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings.iter().map(|f| f.errors.len()).sum()
    }

    /// All errors in input order
    pub fn errors(&self) -> impl Iterator<Item = &CheckError> {
        self.findings.iter().flat_map(|f| f.errors.iter())
    }
}

/// Runs [`ConfigObject::check_state`] over a whole object set
///
/// Each check is a pure read of the snapshot, so a driver may instead split
/// the objects and check them in parallel.
#[derive(Debug, Clone, Copy)]
pub struct StateChecker<'a> {
    state: &'a State,
}

impl<'a> StateChecker<'a> {
    /// Create checker for a snapshot
    #[inline]
    #[must_use]
    pub fn new(state: &'a State) -> Self {
        Self { state }
    }

    /// Check every object, collecting all findings
    #[must_use]
    pub fn check(&self, objects: &[ConfigObject]) -> CheckReport {
        let mut report = CheckReport {
            objects_checked: objects.len(),
            findings: Vec::new(),
        };

        for obj in objects {
            let errors = obj.check_state(self.state);
            if errors.is_empty() {
                continue;
            }
            let object = obj.display_name();
            tracing::warn!("{} has {} state mismatch(es)", object, errors.len());
            report.findings.push(ObjectFindings { object, errors });
        }

        tracing::info!(
            "Checked {} objects: {} error(s)",
            report.objects_checked,
            report.error_count()
        );
        report
    }
}

/// Check every object against the state and return the flat error list
#[must_use]
pub fn check_state(objects: &[ConfigObject], state: &State) -> Vec<CheckError> {
    StateChecker::new(state)
        .check(objects)
        .findings
        .into_iter()
        .flat_map(|f| f.errors)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ConfigExpr;
    use crate::object::{Boilerplate, Output, Variable};
    use crate::state::OutputValueState;
    use stress_addrs::AbsInputVariable;

    fn objects() -> Vec<ConfigObject> {
        vec![
            Boilerplate::new().into(),
            Variable::new(AbsInputVariable::root("in")).into(),
            Output::new(AbsOutputValue::root("a"), ConfigExpr::constant("a")).into(),
            Output::new(AbsOutputValue::root("b"), ConfigExpr::constant("b"))
                .with_sensitive(true)
                .into(),
        ]
    }

    #[test]
    fn not_tracked_message() {
        let err = CheckError::NotTracked {
            addr: AbsOutputValue::root("id"),
        };
        assert_eq!(
            err.to_string(),
            "root module output value id is not tracked in the state"
        );
        assert!(!err.is_mismatch());
    }

    #[test]
    fn unexpected_message_includes_both_sides() {
        let err = CheckError::Unexpected {
            message: "wrong value for root module output value id".into(),
            got: Observed::Value(Value::from("x")),
            want: Observed::Value(Value::from("y")),
        };
        assert_eq!(
            err.to_string(),
            r#"wrong value for root module output value id: got "x", want "y""#
        );
    }

    #[test]
    fn report_success_when_state_matches() {
        let state = State::new()
            .with_output("a", OutputValueState::new("a", false))
            .with_output("b", OutputValueState::new("b", true));
        let report = StateChecker::new(&state).check(&objects());

        assert!(report.is_success());
        assert_eq!(report.objects_checked, 4);
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn report_collects_across_objects() {
        let state = State::new().with_output("b", OutputValueState::new("wrong", false));
        let report = StateChecker::new(&state).check(&objects());

        assert!(!report.is_success());
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].object, "output.a");
        assert_eq!(report.findings[1].object, "output.b");
        assert_eq!(report.error_count(), 3);
    }

    #[test]
    fn flat_error_list_keeps_input_order() {
        let errs = check_state(&objects(), &State::new());
        assert_eq!(errs.len(), 2);
        assert!(errs.iter().all(|e| !e.is_mismatch()));
        assert_eq!(
            errs[0],
            CheckError::NotTracked {
                addr: AbsOutputValue::root("a")
            }
        );
    }
}
