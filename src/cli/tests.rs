//! Unit tests for CLI commands

use crate::cli::{execute, Cli, Commands};
use clap::Parser;
use std::fs;

const MANIFEST: &str = r#"
handlers:
  - type: "app::controllers::Greeter"
    operations:
      - name: hello
        routes:
          - { method: GET, path: /hello }
"#;

#[test]
fn test_resolve_command_parses() {
    let cli = Cli::try_parse_from([
        "brrtdispatch",
        "--registry",
        "handlers.yaml",
        "resolve",
        "--method",
        "GET",
        "--path",
        "/hello",
    ])
    .unwrap();

    assert_eq!(cli.source.registry.unwrap().to_string_lossy(), "handlers.yaml");
    match cli.command {
        Commands::Resolve { method, path } => {
            assert_eq!(method, "GET");
            assert_eq!(path, "/hello");
        }
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "brrtdispatch",
        "routes",
        "--json",
        "--store",
        "src/controllers",
        "--namespace",
        "app::",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::Routes { json: true }));
    assert_eq!(cli.source.namespace.as_deref(), Some("app::"));
}

#[test]
fn test_resolve_requires_method_and_path() {
    assert!(Cli::try_parse_from(["brrtdispatch", "resolve", "--method", "GET"]).is_err());
}

#[test]
fn test_execute_routes_and_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("controllers");
    fs::create_dir(&store).unwrap();
    fs::write(store.join("Greeter.rs"), "").unwrap();
    fs::write(store.join("Ghost.rs"), "").unwrap();
    let manifest = dir.path().join("handlers.yaml");
    fs::write(&manifest, MANIFEST).unwrap();
    let cache = dir.path().join("routes.json");

    let base = |tail: &[&str]| {
        let mut args = vec![
            "brrtdispatch".to_string(),
            "--registry".to_string(),
            manifest.to_string_lossy().into_owned(),
            "--store".to_string(),
            store.to_string_lossy().into_owned(),
            "--namespace".to_string(),
            "app::controllers::".to_string(),
            "--cache".to_string(),
            cache.to_string_lossy().into_owned(),
        ];
        args.extend(tail.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    };

    let mut out = Vec::new();
    execute(&base(&["routes"]), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("GET:/api/hello -> app::controllers::Greeter::hello"));
    assert!(text.contains("app::controllers::Ghost"));
    assert!(text.contains("cache: ColdWrite"));
    assert!(cache.is_file());

    let mut out = Vec::new();
    execute(&base(&["resolve", "--method", "GET", "--path", "/hello"]), &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["handler_type"], "app::controllers::Greeter");
    assert_eq!(value["operation"], "hello");
    assert_eq!(value["kind"], "");

    let err = execute(
        &base(&["resolve", "--method", "POST", "--path", "/hello"]),
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("[POST] /api/hello"));
}

#[test]
fn test_execute_without_registry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from([
        "brrtdispatch",
        "--store",
        dir.path().to_str().unwrap(),
        "--namespace",
        "app::",
        "routes",
    ])
    .unwrap();
    let err = execute(&cli, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("--registry"));
}

#[test]
fn test_execute_with_empty_cache_flag_skips_caching() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("controllers");
    fs::create_dir(&store).unwrap();
    fs::write(store.join("Greeter.rs"), "").unwrap();
    let manifest = dir.path().join("handlers.yaml");
    fs::write(&manifest, MANIFEST).unwrap();

    let cli = Cli::try_parse_from([
        "brrtdispatch",
        "--registry",
        manifest.to_str().unwrap(),
        "--store",
        store.to_str().unwrap(),
        "--namespace",
        "app::controllers::",
        "--cache",
        "",
        "routes",
    ])
    .unwrap();
    let mut out = Vec::new();
    execute(&cli, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("GET:/api/hello -> app::controllers::Greeter::hello"));
    assert!(!text.contains("cache:"));
}
