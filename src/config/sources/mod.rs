//! Config sources, lowest precedence first: global file, explicit file, environment.

pub mod env;
pub mod file;
pub mod global_file;
