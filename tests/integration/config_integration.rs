//! Integration tests for layered configuration and XDG path resolution

use ctxkit::config::{xdg, ConfigLoader, DEFAULT_ENDPOINT};
use std::fs;
use tempfile::TempDir;

use crate::integration::with_xdg_env;

#[test]
fn test_defaults_without_any_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |dirs| {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.defaults.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.logging.enabled);

        let (tokens, contexts) = config.storage.resolve_paths().unwrap();
        assert_eq!(tokens, dirs.data_home.join("ctxkit").join("tokens"));
        assert_eq!(contexts, dirs.contexts_file());
    });
}

#[test]
fn test_global_file_then_env_override() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |dirs| {
        fs::create_dir_all(dirs.global_config().parent().unwrap()).unwrap();
        fs::write(
            dirs.global_config(),
            "[defaults]\nendpoint = \"localhost:50051\"\n\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.defaults.endpoint, "localhost:50051");
        assert_eq!(config.logging.level, "warn");

        std::env::set_var("CTXKIT__DEFAULTS__ENDPOINT", "env.example:443");
        let config = ConfigLoader::load();
        std::env::remove_var("CTXKIT__DEFAULTS__ENDPOINT");
        assert_eq!(config.unwrap().defaults.endpoint, "env.example:443");
    });
}

#[test]
fn test_explicit_file_skips_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |dirs| {
        fs::create_dir_all(dirs.global_config().parent().unwrap()).unwrap();
        fs::write(dirs.global_config(), "[defaults]\nendpoint = \"global:1\"\n").unwrap();

        let explicit = test_dir.path().join("explicit.toml");
        fs::write(&explicit, "[storage]\ncontexts_path = \"/tmp/ctxkit-explicit.toml\"\n")
            .unwrap();

        let config = ConfigLoader::load_for(Some(&explicit)).unwrap();
        assert_eq!(config.defaults.endpoint, DEFAULT_ENDPOINT);
        let (_, contexts) = config.storage.resolve_paths().unwrap();
        assert_eq!(contexts, std::path::PathBuf::from("/tmp/ctxkit-explicit.toml"));
    });
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let test_dir = TempDir::new().unwrap();
    let missing = test_dir.path().join("nope.toml");
    assert!(ConfigLoader::load_from_file(&missing).is_err());
}

#[test]
fn test_xdg_dirs_follow_environment() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, |dirs| {
        assert_eq!(xdg::config_home().unwrap(), dirs.config_home);
        assert_eq!(xdg::data_home().unwrap(), dirs.data_home);

        let app_data = xdg::app_data_dir().unwrap();
        assert_eq!(app_data, dirs.data_home.join("ctxkit"));
        assert!(app_data.exists());
        assert_eq!(xdg::global_config_file().unwrap(), dirs.global_config());
    });
}
