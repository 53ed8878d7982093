//! Layer merging for the config builder.

pub mod merge_policy;
