//! Tests for the config manager.

use super::*;
use crate::error::CfgError;
use crate::manipulator::{ModuleSet, scan_file};
use crate::test_support::ConfigTree;
use crate::yaml::Value;
use std::cell::Cell;
use std::path::Path;

fn envs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn manager(tree: &ConfigTree, environments: &[&str]) -> ConfigManager {
    ConfigManager::new(tree.base(), envs(environments))
}

#[derive(Default)]
struct CountingManipulator {
    scans: Cell<usize>,
}

impl Manipulator for CountingManipulator {
    fn scan_file(&self, path: &Path) -> crate::error::Result<ModuleSet> {
        self.scans.set(self.scans.get() + 1);
        scan_file(path)
    }
}

// ============================================================================
// refresh
// ============================================================================

#[test]
fn test_refresh_splits_sections_in_first_seen_order() {
    let tree = ConfigTree::new();
    tree.write("config.yml", "framework:\n    a: 1\nmonolog:\n    b: 2\n");

    manager(&tree, &[""]).refresh().unwrap();

    assert_eq!(tree.read("config/framework.yml"), "framework:\n    a: 1\n");
    assert_eq!(tree.read("config/monolog.yml"), "monolog:\n    b: 2\n");
    assert_eq!(
        tree.read("config.yml"),
        "imports:\n    - { resource: config/framework.yml }\n    - { resource: config/monolog.yml }\n"
    );
}

#[test]
fn test_refresh_moves_commented_sections_verbatim() {
    let tree = ConfigTree::new();
    tree.write("config.yml", "framework:\n    a: 1\n#old_module:\n#    x: 1\n");

    manager(&tree, &[""]).refresh().unwrap();

    assert_eq!(tree.read("config/old_module.yml"), "#old_module:\n#    x: 1\n");
    assert!(tree.read("config.yml").contains("- { resource: config/old_module.yml }"));
}

#[test]
fn test_refresh_environment_keeps_foreign_imports_in_place() {
    let tree = ConfigTree::new();
    tree.write(
        "config_dev.yml",
        "\
imports:
    - { resource: config.yml }

framework:
    router:
        resource: \"%kernel.root_dir%/config/routing_dev.yml\"
        strict_requirements: true
    profiler: { only_exceptions: false }

web_profiler:
    toolbar: true
    intercept_redirects: false

# Logging
monolog:
    handlers:
        main:
            type: stream
",
    );

    manager(&tree, &["dev"]).refresh().unwrap();

    assert_eq!(
        tree.read("config_dev.yml"),
        "imports:\n    - { resource: config.yml }\n    - { resource: config.dev/framework.yml }\n    - { resource: config.dev/monolog.yml }\n    - { resource: config.dev/web_profiler.yml }\n"
    );
    assert_eq!(
        tree.read("config.dev/framework.yml"),
        "framework:\n    router:\n        resource: \"%kernel.root_dir%/config/routing_dev.yml\"\n        strict_requirements: true\n    profiler: { only_exceptions: false }\n"
    );
    assert_eq!(
        tree.read("config.dev/monolog.yml"),
        "# Logging\nmonolog:\n    handlers:\n        main:\n            type: stream\n"
    );
}

#[test]
fn test_refresh_skips_missing_environments() {
    let tree = ConfigTree::new();
    tree.write("config.yml", "framework: ~\n");

    let mut manager = manager(&tree, &["", "prod", "test"]);
    manager.refresh().unwrap();

    assert!(tree.exists("config/framework.yml"));
    assert!(!tree.exists("config.prod"));
    assert!(!tree.exists("config.test"));
    assert_eq!(manager.state(), InitState::Initialized);
}

#[test]
fn test_refresh_leaves_file_without_sections_alone() {
    let tree = ConfigTree::new();
    tree.write("config_test.yml", "# nothing configured yet\n");

    manager(&tree, &["test"]).refresh().unwrap();

    assert_eq!(tree.read("config_test.yml"), "# nothing configured yet\n");
    assert!(tree.path("config.test").is_dir());
}

#[test]
fn test_refresh_appends_to_data_less_module_file() {
    let tree = ConfigTree::new();
    tree.write("config.yml", "twig:\n    debug: true\n");
    tree.write("config/twig.yml", "# twig settings live here\n");

    manager(&tree, &[""]).refresh().unwrap();

    assert_eq!(
        tree.read("config/twig.yml"),
        "# twig settings live here\n\ntwig:\n    debug: true\n"
    );
}

#[test]
fn test_refresh_is_all_or_nothing() {
    let tree = ConfigTree::new();
    let root = "framework:\n    a: 1\nmonolog:\n    b: 2\n";
    tree.write("config.yml", root);
    tree.write("config/monolog.yml", "monolog:\n    b: 3\n");

    let mut manager = manager(&tree, &[""]);
    let err = manager.refresh().unwrap_err();

    assert!(matches!(err, CfgError::ModuleAlreadyExists(_)));
    let message = err.to_string();
    assert!(message.contains("'monolog'"));
    assert!(message.contains("config.yml"));
    assert!(message.contains("config/monolog.yml"));

    assert_eq!(tree.read("config.yml"), root);
    assert_eq!(tree.read("config/monolog.yml"), "monolog:\n    b: 3\n");
    assert!(!tree.exists("config/framework.yml"));
    assert_eq!(manager.state(), InitState::NotInitialized);
}

#[test]
fn test_refresh_runs_once_per_instance() {
    let tree = ConfigTree::new();
    tree.write("config.yml", "framework:\n    a: 1\n");

    let mut manager =
        ConfigManager::with_manipulator(tree.base(), envs(&[""]), CountingManipulator::default());
    manager.refresh().unwrap();
    assert_eq!(manager.manipulator().scans.get(), 1);

    // New sections added after the first refresh are not picked up.
    tree.write(
        "config.yml",
        "imports:\n    - { resource: config/framework.yml }\nswiftmailer: ~\n",
    );
    manager.refresh().unwrap();

    assert_eq!(manager.manipulator().scans.get(), 1);
    assert!(!tree.exists("config/swiftmailer.yml"));
}

#[test]
fn test_refresh_again_with_fresh_manager_changes_nothing() {
    let tree = ConfigTree::new();
    tree.write(
        "config.yml",
        "imports:\n    - { resource: parameters.yml }\nframework:\n    a: 1\ntwig: ~\n",
    );
    tree.write("config_dev.yml", "imports:\n    - { resource: config.yml }\nmonolog: ~\n");

    manager(&tree, &["", "dev"]).refresh().unwrap();
    let first = tree.snapshot();

    manager(&tree, &["", "dev"]).refresh().unwrap();

    assert_eq!(tree.snapshot(), first);
}

#[test]
fn test_refresh_does_not_duplicate_existing_import() {
    let tree = ConfigTree::new();
    tree.write(
        "config.yml",
        "imports:\n    - { resource: config/framework.yml }\nframework:\n    a: 1\n",
    );

    manager(&tree, &[""]).refresh().unwrap();

    assert_eq!(
        tree.read("config.yml"),
        "imports:\n    - { resource: config/framework.yml }\n"
    );
}

#[test]
fn test_refresh_rejects_non_list_imports() {
    let tree = ConfigTree::new();
    tree.write("config.yml", "imports:\n    resource: a.yml\nframework: ~\n");

    let err = manager(&tree, &[""]).refresh().unwrap_err();

    assert!(matches!(err, CfgError::Yaml(_)));
    assert!(!tree.exists("config/framework.yml"));
}

// ============================================================================
// can_create_module_config / add_module_config
// ============================================================================

#[test]
fn test_can_create_module_config() {
    let tree = ConfigTree::new();
    let manager = manager(&tree, &[""]);

    assert!(manager.can_create_module_config("foo", "", true).unwrap());

    tree.write("config/foo.yml", "");
    assert!(manager.can_create_module_config("foo", "", true).unwrap());
    assert!(!manager.can_create_module_config("foo", "", false).unwrap());

    tree.write("config/foo.yml", "foo: ~\n");
    assert!(!manager.can_create_module_config("foo", "", true).unwrap());

    tree.write("config/foo.yml", "just a string\n");
    assert!(!manager.can_create_module_config("foo", "", true).unwrap());
}

#[test]
fn test_add_module_config_refuses_to_clobber() {
    let tree = ConfigTree::new();
    tree.write("config/foo.yml", "foo:\n    x: 0\n");
    tree.write("config.yml", "imports: []\n");

    let err = manager(&tree, &[""])
        .add_module_config("foo", "foo:\n    x: 1", "", false, true)
        .unwrap_err();

    assert!(matches!(err, CfgError::ModuleAlreadyExists(_)));
    assert_eq!(tree.read("config/foo.yml"), "foo:\n    x: 0\n");
    assert_eq!(tree.read("config.yml"), "imports: []\n");
}

#[test]
fn test_add_module_config_creates_and_enables() {
    let tree = ConfigTree::new();
    tree.write("config_dev.yml", "imports:\n    - { resource: config.yml }\n");

    manager(&tree, &["dev"])
        .add_module_config("foo", "\n\nfoo:\n    x: 1", "dev", false, true)
        .unwrap();

    assert_eq!(tree.read("config.dev/foo.yml"), "foo:\n    x: 1\n");
    assert_eq!(
        tree.read("config_dev.yml"),
        "imports:\n    - { resource: config.yml }\n    - { resource: config.dev/foo.yml }\n"
    );
}

#[test]
fn test_add_module_config_without_enable_leaves_importer() {
    let tree = ConfigTree::new();

    manager(&tree, &[""])
        .add_module_config("foo", "foo: ~", "", false, false)
        .unwrap();

    assert_eq!(tree.read("config/foo.yml"), "foo: ~\n");
    assert!(!tree.exists("config.yml"));
}

#[test]
fn test_add_module_config_overwrite_replaces_content() {
    let tree = ConfigTree::new();
    tree.write("config/foo.yml", "foo:\n    x: 0\n");

    manager(&tree, &[""])
        .add_module_config("foo", "foo:\n    x: 1\n", "", true, false)
        .unwrap();

    assert_eq!(tree.read("config/foo.yml"), "foo:\n    x: 1\n");
}

#[test]
fn test_add_module_config_separates_unterminated_existing_text() {
    let tree = ConfigTree::new();
    tree.write("config/twig.yml", "# twig notes");

    manager(&tree, &[""])
        .add_module_config("twig", "twig:\n    debug: true", "", false, false)
        .unwrap();

    assert_eq!(
        tree.read("config/twig.yml"),
        "# twig notes\n\ntwig:\n    debug: true\n"
    );
}

#[test]
fn test_add_module_config_rejects_path_like_module_name() {
    let tree = ConfigTree::new();
    tree.write("config.yml", "imports: []\n");

    let err = manager(&tree, &[""])
        .add_module_config("../escaped", "x: 1", "", false, true)
        .unwrap_err();

    assert!(matches!(err, CfgError::UserError(_)));
    assert!(!tree.exists("escaped.yml"));
    assert!(!tree.exists("config/escaped.yml"));
    assert_eq!(tree.read("config.yml"), "imports: []\n");
}

// ============================================================================
// enable_module_config
// ============================================================================

#[test]
fn test_enable_missing_module_fails() {
    let tree = ConfigTree::new();

    let err = manager(&tree, &["dev"])
        .enable_module_config("foo", "dev")
        .unwrap_err();

    assert!(matches!(err, CfgError::MissingModuleConfig(_)));
    assert!(err.to_string().contains("config.dev/foo.yml"));
    assert!(!tree.exists("config_dev.yml"));
}

#[test]
fn test_enable_rejects_path_like_module_name() {
    let tree = ConfigTree::new();
    tree.write("escaped.yml", "x: 1\n");

    let err = manager(&tree, &[""])
        .enable_module_config("../escaped", "")
        .unwrap_err();

    assert!(matches!(err, CfgError::UserError(_)));
    assert!(!tree.exists("config.yml"));
}

#[test]
fn test_enable_is_idempotent() {
    let tree = ConfigTree::new();
    tree.write("config/b.yml", "b: ~\n");
    tree.write("config/a.yml", "a: ~\n");
    let manager = manager(&tree, &[""]);

    manager.enable_module_config("b", "").unwrap();
    manager.enable_module_config("a", "").unwrap();
    let once = tree.read("config.yml");
    manager.enable_module_config("a", "").unwrap();

    assert_eq!(tree.read("config.yml"), once);
    assert_eq!(
        once,
        "imports:\n    - { resource: config/a.yml }\n    - { resource: config/b.yml }\n"
    );
}

// ============================================================================
// add_parameter
// ============================================================================

#[test]
fn test_add_parameter_updates_both_files() {
    let tree = ConfigTree::new();
    tree.write(
        "parameters.yml",
        "# generated\nparameters:\n    secret: abc\n",
    );
    tree.write(
        "parameters.yml.dist",
        "# template\nparameters:\n    secret:    ThisTokenIsNotSoSecretChangeIt\n",
    );

    manager(&tree, &[""])
        .add_parameter("mailer_port", &Value::from(25), Some("SMTP port"))
        .unwrap();

    assert_eq!(
        tree.read("parameters.yml"),
        "parameters:\n    secret: abc\n    mailer_port: 25\n"
    );
    assert_eq!(
        tree.read("parameters.yml.dist"),
        "# template\nparameters:\n    secret:    ThisTokenIsNotSoSecretChangeIt\n\n    # SMTP port\n    mailer_port: 25\n"
    );
}

// ============================================================================
// accessors
// ============================================================================

#[test]
fn test_new_manager_is_not_initialized() {
    let tree = ConfigTree::new();
    let manager = manager(&tree, &["", "dev"]);

    assert_eq!(manager.state(), InitState::NotInitialized);
    assert_eq!(manager.environments(), &["".to_string(), "dev".to_string()]);
    assert_eq!(manager.layout().base_config_folder(), tree.base());
}
