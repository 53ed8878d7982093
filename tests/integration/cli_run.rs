//! Integration tests for the CLI route table over the default on-disk stores

use clap::Parser;
use ctxkit::cli::{map_error, Cli, RunContext};
use ctxkit::store::ContextConfigStore;
use std::fs;
use tempfile::TempDir;

use crate::integration::with_xdg_env;

fn run(ctx: &RunContext, argv: &[&str]) -> Result<String, String> {
    let mut full = vec!["ctxkit"];
    full.extend_from_slice(argv);
    let cli = Cli::try_parse_from(full).map_err(|e| e.to_string())?;
    ctx.execute(&cli.command).map_err(|e| map_error(&e))
}

#[test]
fn test_full_session_on_default_paths() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |dirs| {
        let ctx = RunContext::new(None).unwrap();

        let out = run(&ctx, &["token", "set", "dev", "s3cret", "--endpoint", "localhost:50051"])
            .unwrap();
        assert!(out.contains("localhost:50051"));
        assert!(!out.contains("s3cret"));

        let out = run(&ctx, &["context", "set", "work", "acme", "dev"]).unwrap();
        assert!(out.contains("work"));
        assert!(dirs.contexts_file().exists());

        let out = run(&ctx, &["token", "list", "--reveal-tokens"]).unwrap();
        assert!(out.contains("s3cret"));

        run(&ctx, &["token", "rename", "dev", "prod"]).unwrap();
        let out = run(&ctx, &["context", "current", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["contexts"][0]["token_name"], "prod");
        assert_eq!(value["contexts"][0]["current"], true);

        let out = run(&ctx, &["token", "delete", "prod"]).unwrap();
        assert_eq!(out, "deleted context: work\ndeleted token: prod");

        let out = run(&ctx, &["context", "list"]).unwrap();
        assert!(out.starts_with("No contexts found."));
    });
}

#[test]
fn test_arity_errors_touch_no_store() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |dirs| {
        let ctx = RunContext::new(None).unwrap();

        let err = run(&ctx, &["context", "rename", "only-one"]).unwrap_err();
        assert_eq!(err, "must provide only 2 arguments: old name and new name");

        let err = run(&ctx, &["context", "set", "a", "b"]).unwrap_err();
        assert_eq!(err, "must provide only 3 arguments: name, tenant, and token name");

        let err = run(&ctx, &["token", "delete"]).unwrap_err();
        assert_eq!(err, "must provide only 1 argument: name");

        assert!(!dirs.contexts_file().exists());
        assert!(!dirs.data_home.join("ctxkit").join("tokens").exists());
    });
}

#[test]
fn test_arity_error_wins_over_unopenable_token_store() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |_| {
        let blocker = test_dir.path().join("notadir");
        fs::write(&blocker, "plain file").unwrap();
        let cfg_path = test_dir.path().join("ctxkit.toml");
        fs::write(
            &cfg_path,
            format!(
                "[storage]\ntokens_path = \"{}\"\n",
                blocker.join("tokens").display()
            ),
        )
        .unwrap();

        let ctx = RunContext::new(Some(cfg_path)).unwrap();
        let err = run(&ctx, &["context", "rename", "onlyone"]).unwrap_err();
        assert_eq!(err, "must provide only 2 arguments: old name and new name");

        let err = run(&ctx, &["context", "rename", "a", "b"]).unwrap_err();
        assert!(err.starts_with("Database error"), "got: {}", err);
    });
}

#[test]
fn test_not_found_messages() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |_| {
        let ctx = RunContext::new(None).unwrap();

        let err = run(&ctx, &["context", "set", "work", "acme", "ghost"]).unwrap_err();
        assert_eq!(err, "could not find token: ghost");

        let err = run(&ctx, &["context", "use", "ghost"]).unwrap_err();
        assert_eq!(err, "could not find available context: ghost");

        let err = run(&ctx, &["token", "delete", "ghost"]).unwrap_err();
        assert_eq!(err, "could not find token: ghost");
    });
}

#[test]
fn test_delete_current_context_is_reported_by_validate() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |_| {
        let ctx = RunContext::new(None).unwrap();
        run(&ctx, &["token", "set", "dev", "s"]).unwrap();
        run(&ctx, &["context", "set", "work", "acme", "dev"]).unwrap();

        let out = run(&ctx, &["context", "delete", "work"]).unwrap();
        assert_eq!(out, "deleted context: work");
        assert_eq!(ctx.stores().unwrap().contexts.get().unwrap().current_context, "work");

        let out = run(&ctx, &["validate", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["issues"][0]["kind"], "dangling_current");
        assert_eq!(value["issues"][0]["context"], "work");
    });
}

#[test]
fn test_explicit_config_redirects_stores() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |dirs| {
        let elsewhere = test_dir.path().join("elsewhere");
        let cfg_path = test_dir.path().join("ctxkit.toml");
        fs::write(
            &cfg_path,
            format!(
                "[storage]\ntokens_path = \"{}\"\ncontexts_path = \"{}\"\n\n[defaults]\nendpoint = \"cfg.example:443\"\n",
                elsewhere.join("tokens").display(),
                elsewhere.join("contexts.toml").display()
            ),
        )
        .unwrap();

        let ctx = RunContext::new(Some(cfg_path)).unwrap();
        let out = run(&ctx, &["token", "set", "dev", "s"]).unwrap();
        assert!(out.contains("cfg.example:443"));
        run(&ctx, &["context", "set", "work", "acme", "dev"]).unwrap();

        assert!(elsewhere.join("contexts.toml").exists());
        assert!(!dirs.contexts_file().exists());
    });
}
