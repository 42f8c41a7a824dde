mod common;

use common::*;

#[test]
fn test_check_valid_project() {
    let env = TestEnv::with_locales();

    let result = env.run(&["check"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("module:  i18n"), "{}", result.stdout);
    assert!(result.stdout.contains("en, fr"), "{}", result.stdout);
    // check never writes
    assert!(env.read("src/i18n.d.ts").is_none());
}

#[test]
fn test_check_json_lists_locales() {
    let env = TestEnv::with_locales();

    let result = env.run(&["check", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_lines();
    assert_eq!(events[0]["status"], "ok");
    assert_eq!(events[0]["locales"], serde_json::json!(["en", "fr"]));
    assert_eq!(events[0]["mode"], "normal");
}

#[test]
fn test_check_empty_locales_directory_is_rejected() {
    let env = TestEnv::new();
    env.write("localetypes.toml", CONFIG);
    env.write("locales/README.md", "no locales yet");

    let result = env.run(&["check", "--json"]);

    assert!(!result.success);
    let events = result.json_lines();
    assert_eq!(events[0]["status"], "rejected");
    assert!(events[0]["reason"].as_str().unwrap().contains("no .yaml files"));
}

#[test]
fn test_check_lazy_without_default_locale_is_rejected() {
    let env = TestEnv::with_locales();
    env.write(
        "localetypes.toml",
        "[plugin]\nmodule_name = \"i18n\"\nlocales = \"locales\"\noutput = \"out.d.ts\"\nlazy = true\n",
    );

    let result = env.run(&["check"]);

    assert!(!result.success);
    assert!(result.stderr.contains("defaultLocale"), "{}", result.stderr);
}

#[test]
fn test_check_warns_about_unknown_keys() {
    let env = TestEnv::with_locales();
    env.write(
        "localetypes.toml",
        &format!("{CONFIG}modul_name = \"typo\"\n"),
    );

    let result = env.run(&["check"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("did you mean 'module_name'?"),
        "{}",
        result.stderr
    );
}

#[test]
fn test_check_explicit_config_path() {
    let env = TestEnv::with_locales();
    let config = env.project_path("localetypes.toml");
    let elsewhere = tempfile::tempdir().unwrap();

    let result = env.run_from(
        elsewhere.path(),
        &["check", "--config", config.to_str().unwrap()],
    );

    assert!(result.success, "{}", result.combined_output());
}
