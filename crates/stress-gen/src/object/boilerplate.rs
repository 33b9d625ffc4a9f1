//! Module boilerplate
//!
//! Not part of random generation: a driver instantiates this directly as the
//! first object of each module before appending generated items.

use std::collections::BTreeMap;

use hcl::expr::{Expression, Object, ObjectKey};
use hcl::{Attribute, Block, Identifier};
use stress_addrs::ProviderAddr;

use super::FileBody;
use crate::check::CheckError;
use crate::state::State;

/// Items every generated module needs to be valid
///
/// Currently the provider requirements. Local names iterate in sorted order
/// so generated files are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boilerplate {
    /// Provider local name → source address
    pub providers: BTreeMap<String, ProviderAddr>,
}

impl Boilerplate {
    /// Create boilerplate with no provider requirements
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider requirement
    #[inline]
    #[must_use]
    pub fn with_provider(mut self, local_name: impl Into<String>, addr: ProviderAddr) -> Self {
        self.providers.insert(local_name.into(), addr);
        self
    }

    pub(crate) fn display_name(&self) -> String {
        "module boilerplate".to_string()
    }

    pub(crate) fn append_config(&self, to: &mut FileBody) {
        let requirements = self
            .providers
            .iter()
            .fold(Block::builder("required_providers"), |builder, (local_name, addr)| {
                let source: Object<ObjectKey, Expression> = [(
                    ObjectKey::Identifier(Identifier::unchecked("source")),
                    Expression::String(addr.to_string()),
                )]
                .into_iter()
                .collect();
                builder.add_attribute(Attribute::new(
                    Identifier::unchecked(local_name.as_str()),
                    Expression::Object(source),
                ))
            })
            .build();

        to.append_block(Block::builder("terraform").add_block(requirements).build());
    }

    pub(crate) fn check_state(&self, _state: &State) -> Vec<CheckError> {
        // Nothing in the state comes from boilerplate itself.
        Vec::new()
    }
}
