//! Generate a module, simulate the host's state, and check it

use pretty_assertions::assert_eq;
use stress_addrs::{AbsInputVariable, ProviderAddr};
use stress_gen::{
    check_state, generate_config_file, Boilerplate, CheckError, ConfigExpr, ConfigObject,
    OutputValueState, State, StateChecker, StressSettings, TypeConstraint, Variable,
};
use stress_test_utils::{init_tracing, module_output_ref, root_output, ModuleFixture};

#[test]
fn correct_state_passes_check() {
    init_tracing();
    let mut root = ModuleFixture::root();
    let region = root.add_variable("region", "us-east-1");
    root.add_output("region", region);
    root.add_output("answer", ConfigExpr::constant(42));

    let text = root.config_text();
    assert!(text.contains("required_providers"));
    assert!(text.contains(r#"variable "region""#));
    assert!(text.contains("value = var.region"));

    let report = StateChecker::new(&root.expected_state()).check(&root.objects);
    assert!(report.is_success());
    assert_eq!(report.objects_checked, 4);
}

#[test]
fn state_loaded_from_json_is_checked() {
    let mut root = ModuleFixture::root();
    let name = root.add_variable("name", "web");
    root.add_output("name", name);

    let json = r#"{
        "outputs": {
            "name": { "value": "db", "sensitive": true }
        }
    }"#;
    let state = State::from_json(json).unwrap();

    let errors = check_state(&root.objects, &state);
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].to_string(),
        r#"wrong value for root module output value name: got "db", want "web""#
    );
    assert_eq!(
        errors[1].to_string(),
        "wrong sensitive flag for root module output value name: got true, want false"
    );
}

#[test]
fn missing_output_reported_once() {
    let mut root = ModuleFixture::root();
    root.add_output("gone", ConfigExpr::constant("x"));

    let errors = check_state(&root.objects, &State::new());
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], CheckError::NotTracked { addr } if addr.name == "gone"));
}

#[test]
fn child_module_values_reach_root_outputs() {
    let mut root = ModuleFixture::root();
    let mut child = ModuleFixture::new(root.registry.new_child("child"));

    // The parent passes a value in; the child echoes it back out.
    let input = child.add_variable("input", vec![1, 2, 3]);
    let echoed = child.add_output("echo", input).value.clone();
    root.registry
        .add_ref_target(module_output_ref("child", "echo", echoed));

    let target = root.registry.ref_targets().remove(0);
    root.add_output("from_child", target);

    // Child outputs are not recorded in the state and never fail a check.
    let state = root.expected_state();
    assert!(check_state(&child.objects, &State::new()).is_empty());
    assert!(check_state(&root.objects, &state).is_empty());

    let text = root.config_text();
    assert!(text.contains("value = module.child.echo"));
    assert_eq!(
        state.output_names().collect::<Vec<_>>(),
        vec!["from_child"]
    );
}

#[test]
fn boilerplate_lists_providers_by_name() {
    let objects: Vec<ConfigObject> = vec![Boilerplate::new()
        .with_provider("local", ProviderAddr::official("local").unwrap())
        .with_provider("aws", ProviderAddr::official("aws").unwrap())
        .into()];
    let text = String::from_utf8(generate_config_file(&objects).unwrap()).unwrap();

    let aws = text.find("aws").unwrap();
    let local = text.find("local").unwrap();
    assert!(aws < local);
    assert!(text.contains("registry.terraform.io/hashicorp/local"));
}

#[test]
fn typed_variable_with_default_needs_no_input() {
    let mut root = ModuleFixture::root();
    let ty = TypeConstraint::object([
        ("name", TypeConstraint::String),
        ("ports", TypeConstraint::list(TypeConstraint::Number)),
    ]);
    let addr = AbsInputVariable::root("settings");
    root.objects
        .push(Variable::new(addr).with_type_constraint(ty).into());
    root.objects
        .push(Variable::new(AbsInputVariable::root("flag")).with_default(true).into());

    let vars: Vec<Variable> = root
        .objects
        .iter()
        .filter_map(|obj| match obj {
            ConfigObject::Variable(v) => Some(v.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(root.registry.missing_input_variables(&vars), vec!["settings"]);

    let text = root.config_text();
    assert!(text.contains("type = object({"));
    assert!(text.contains("list(number)"));
}

#[test]
fn sensitive_root_output_round_trip() {
    let objects = vec![root_output("secret", ConfigExpr::constant("hunter2"))];
    let ConfigObject::Output(out) = &objects[0] else {
        unreachable!()
    };
    let sensitive: Vec<ConfigObject> = vec![out.clone().with_sensitive(true).into()];

    let state = State::new().with_output("secret", OutputValueState::new("hunter2", true));
    assert!(check_state(&sensitive, &state).is_empty());
    assert_eq!(check_state(&objects, &state).len(), 1);

    let text = String::from_utf8(generate_config_file(&sensitive).unwrap()).unwrap();
    assert!(text.contains("sensitive = true"));
}

#[test]
fn settings_shape_generated_module_tree() {
    let settings = StressSettings::from_toml(
        r#"
        config_file_name = "stress.tf"
        max_module_depth = 2

        [providers]
        local = "hashicorp/local"
        "#,
    )
    .unwrap();

    let root = ModuleFixture::from_settings(&settings);
    let child = root.child("a", &settings).unwrap();
    let grandchild = child.child("b", &settings).unwrap();
    assert!(grandchild.child("c", &settings).is_none());
    assert!(grandchild.registry.child_names().is_empty());

    let (name, text) = grandchild.config_file(&settings);
    assert_eq!(name, "stress.tf");
    assert!(text.contains("registry.terraform.io/hashicorp/local"));
    assert!(!text.contains("hashicorp/null"));
}
