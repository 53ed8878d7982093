//! Shared test utilities for integration tests
//!
//! Isolates HOME and the XDG directories so stores and config files opened
//! through the default paths land in a temp dir.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes environment access across all tests in this binary.
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: [&str; 4] = ["HOME", "XDG_CONFIG_HOME", "XDG_DATA_HOME", "CTXKIT_LOG"];

/// Environment variable state to restore after test
struct EnvState(Vec<(&'static str, Option<String>)>);

impl EnvState {
    fn capture() -> Self {
        Self(
            ISOLATED_VARS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect(),
        )
    }

    fn restore(self) {
        for (key, value) in self.0 {
            match value {
                Some(orig) => std::env::set_var(key, orig),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Directories a test sees while inside [`with_xdg_env`].
pub struct XdgDirs {
    pub config_home: PathBuf,
    pub data_home: PathBuf,
}

impl XdgDirs {
    /// `<config_home>/ctxkit/config.toml`
    pub fn global_config(&self) -> PathBuf {
        self.config_home.join("ctxkit").join("config.toml")
    }

    /// `<config_home>/ctxkit/contexts.toml`
    pub fn contexts_file(&self) -> PathBuf {
        self.config_home.join("ctxkit").join("contexts.toml")
    }
}

/// Run `f` with isolated XDG directories, restoring the environment afterwards.
///
/// XDG_CONFIG_HOME is the temp dir itself; XDG_DATA_HOME and HOME are
/// `data/` and `home/` below it.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce(&XdgDirs) -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let dirs = XdgDirs {
        config_home: test_dir.path().to_path_buf(),
        data_home: test_dir.path().join("data"),
    };
    let home = test_dir.path().join("home");
    std::fs::create_dir_all(&dirs.data_home).unwrap();
    std::fs::create_dir_all(&home).unwrap();

    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &dirs.config_home);
    std::env::set_var("XDG_DATA_HOME", &dirs.data_home);
    std::env::remove_var("CTXKIT_LOG");

    let result = f(&dirs);

    env_state.restore();

    result
}
