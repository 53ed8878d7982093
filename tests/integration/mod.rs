//! Integration tests for ctxkit

mod cli_run;
mod config_integration;
mod consistency_scenarios;
mod test_utils;

pub use test_utils::with_xdg_env;
