//! Testing utilities for the stress-test generator workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use hcl::Value;
use stress_addrs::{AbsInputVariable, AbsOutputValue, ProviderAddr, RefAddr};
use stress_gen::{
    Boilerplate, ConfigExpr, ConfigObject, Output, OutputValueState, Registry, State,
    StressSettings, Variable,
};

/// Install a test-friendly tracing subscriber, honoring `RUST_LOG`
///
/// Safe to call from every test; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn var_ref(name: &str, value: impl Into<Value>) -> ConfigExpr {
    ConfigExpr::reference(RefAddr::input_variable(name), ConfigExpr::constant(value))
}

pub fn module_output_ref(call: &str, name: &str, target: ConfigExpr) -> ConfigExpr {
    ConfigExpr::reference(RefAddr::module_output(call, name), target)
}

pub fn root_output(name: &str, value: ConfigExpr) -> ConfigObject {
    Output::new(AbsOutputValue::root(name), value).into()
}

pub fn null_boilerplate() -> ConfigObject {
    let null = ProviderAddr::official("null").unwrap();
    Boilerplate::new().with_provider("null", null).into()
}

/// Objects for one generated module, built against its registry node
#[derive(Debug)]
pub struct ModuleFixture {
    pub registry: Registry,
    pub objects: Vec<ConfigObject>,
}

impl ModuleFixture {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            objects: Vec::new(),
        }
    }

    /// Root module fixture with the `null` provider boilerplate
    pub fn root() -> Self {
        let mut fixture = Self::new(Registry::new_root());
        fixture.objects.push(null_boilerplate());
        fixture
    }

    /// Root module fixture requiring the providers in `settings`
    pub fn from_settings(settings: &StressSettings) -> Self {
        let mut fixture = Self::new(Registry::new_root());
        fixture.objects.push(settings.boilerplate().unwrap().into());
        fixture
    }

    /// Fixture for a called module, `None` once `settings` forbids nesting deeper
    pub fn child(&self, name: &str, settings: &StressSettings) -> Option<Self> {
        if !settings.allows_depth(self.registry.depth() + 1) {
            return None;
        }
        let mut fixture = Self::new(self.registry.new_child(name));
        fixture.objects.push(settings.boilerplate().unwrap().into());
        Some(fixture)
    }

    /// File name and content a driver would write for this module
    pub fn config_file(&self, settings: &StressSettings) -> (String, String) {
        (settings.config_file_name.clone(), self.config_text())
    }

    /// Declare a required variable, record its value, and make it referable
    pub fn add_variable(&mut self, name: &str, value: impl Into<Value>) -> ConfigExpr {
        let value = value.into();
        let addr = AbsInputVariable::new(self.registry.module_path(), name);
        self.objects.push(Variable::new(addr).into());
        self.registry.set_input_variable(name, value.clone());

        let target = var_ref(name, value);
        self.registry.add_ref_target(target.clone());
        target
    }

    pub fn add_output(&mut self, name: &str, value: ConfigExpr) -> &Output {
        let addr = AbsOutputValue::new(self.registry.module_path(), name);
        self.objects.push(Output::new(addr, value).into());
        match self.objects.last() {
            Some(ConfigObject::Output(out)) => out,
            _ => unreachable!(),
        }
    }

    /// State a correct host would record for this module's root outputs
    pub fn expected_state(&self) -> State {
        self.objects
            .iter()
            .filter_map(|obj| match obj {
                ConfigObject::Output(out) if out.addr.is_root() => Some(out),
                _ => None,
            })
            .fold(State::new(), |state, out| {
                state.with_output(
                    out.addr.name.clone(),
                    OutputValueState::new(out.value.expected_value(), out.sensitive),
                )
            })
    }

    pub fn config_text(&self) -> String {
        let bytes = stress_gen::generate_config_file(&self.objects).unwrap();
        String::from_utf8(bytes).unwrap()
    }
}
