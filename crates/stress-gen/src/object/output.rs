//! Output value declarations

use hcl::{Attribute, Block};
use stress_addrs::AbsOutputValue;

use super::FileBody;
use crate::check::{CheckError, Observed};
use crate::expr::ConfigExpr;
use crate::state::State;

/// Declaration of an output value
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Address of the declaration
    pub addr: AbsOutputValue,

    /// Expression assigned to `value`
    pub value: ConfigExpr,

    /// Whether the output is marked sensitive
    pub sensitive: bool,
}

impl Output {
    /// Non-sensitive output
    #[inline]
    #[must_use]
    pub fn new(addr: AbsOutputValue, value: ConfigExpr) -> Self {
        Self {
            addr,
            value,
            sensitive: false,
        }
    }

    /// With sensitivity flag
    #[inline]
    #[must_use]
    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub(crate) fn display_name(&self) -> String {
        self.addr.to_string()
    }

    pub(crate) fn append_config(&self, to: &mut FileBody) {
        let mut builder = Block::builder("output")
            .add_label(self.addr.name.as_str())
            .add_attribute(Attribute::new("value", self.value.build_expr()));
        if self.sensitive {
            builder = builder.add_attribute(Attribute::new("sensitive", true));
        }
        to.append_block(builder.build());
    }

    pub(crate) fn check_state(&self, state: &State) -> Vec<CheckError> {
        // Only root module outputs are recorded in the final state; the
        // others just carry values between modules.
        if !self.addr.is_root() {
            return Vec::new();
        }

        let Some(recorded) = state.output_value(&self.addr) else {
            return vec![CheckError::NotTracked {
                addr: self.addr.clone(),
            }];
        };

        let mut errs = Vec::new();
        let want = self.value.expected_value();
        if recorded.value != want {
            errs.push(CheckError::Unexpected {
                message: format!("wrong value for root module output value {}", self.addr.name),
                got: Observed::Value(recorded.value.clone()),
                want: Observed::Value(want),
            });
        }
        if recorded.sensitive != self.sensitive {
            errs.push(CheckError::Unexpected {
                message: format!(
                    "wrong sensitive flag for root module output value {}",
                    self.addr.name
                ),
                got: Observed::Flag(recorded.sensitive),
                want: Observed::Flag(self.sensitive),
            });
        }
        errs
    }
}
