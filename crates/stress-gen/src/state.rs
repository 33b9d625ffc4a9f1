//! Runtime state snapshot
//!
//! Provides [`State`], the part of the host's persisted state that generated
//! objects can be checked against. Only root module output values are
//! persisted, so that is all a snapshot records.

use std::collections::BTreeMap;

use hcl::Value;
use serde::{Deserialize, Serialize};
use stress_addrs::AbsOutputValue;

use crate::error::StateError;

/// Recorded output value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValueState {
    /// Final value
    pub value: Value,

    /// Whether the output was marked sensitive
    #[serde(default)]
    pub sensitive: bool,
}

impl OutputValueState {
    /// Create new record
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<Value>, sensitive: bool) -> Self {
        Self {
            value: value.into(),
            sensitive,
        }
    }
}

/// Snapshot of the host's state after evaluating a configuration
///
/// Immutable once built; checks only read from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    outputs: BTreeMap<String, OutputValueState>,
}

impl State {
    /// Empty snapshot
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a recorded root module output
    #[inline]
    #[must_use]
    pub fn with_output(mut self, name: impl Into<String>, output: OutputValueState) -> Self {
        self.outputs.insert(name.into(), output);
        self
    }

    /// Parse the host's JSON state form
    ///
    /// Expects `{"outputs": {"NAME": {"value": ..., "sensitive": bool}}}`.
    /// Unrelated top-level keys are ignored.
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or outputs have the wrong shape
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        serde_json::from_str(json).map_err(StateError::InvalidJson)
    }

    /// Serialize to the same JSON form [`State::from_json`] reads
    ///
    /// # Errors
    /// Returns error if a value cannot be represented as JSON
    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string_pretty(self).map_err(StateError::InvalidJson)
    }

    /// Look up a recorded output value
    ///
    /// Returns `None` for untracked outputs and for any non-root address,
    /// since only root module outputs are persisted.
    #[must_use]
    pub fn output_value(&self, addr: &AbsOutputValue) -> Option<&OutputValueState> {
        if !addr.is_root() {
            return None;
        }
        self.outputs.get(&addr.name)
    }

    /// Names of recorded outputs, sorted
    pub fn output_names(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    /// Check if nothing is recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
