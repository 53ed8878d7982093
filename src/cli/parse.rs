//! CLI parse: clap types for ctxkit. No behavior; definitions only.
//!
//! Positional arguments are collected as lists and unpacked by the route
//! table, which owns the arity rules.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ctxkit - manage API tokens and the contexts that use them
#[derive(Parser)]
#[command(name = "ctxkit")]
#[command(about = "Manage API tokens and the named contexts that use them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable logging at debug level to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off); enables logging
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage stored tokens
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },
    /// Manage contexts (tenant + token bindings)
    Context {
        #[command(subcommand)]
        command: ContextCommands,
    },
    /// Check that every context resolves to a token and the current context exists
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Store a token: <name> <secret>
    Set {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
        /// Endpoint the token is used against (defaults from config)
        #[arg(long)]
        endpoint: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Rename a token and every context reference to it: <old name> <new name>
    Rename {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Delete a token and every context that uses it: <name>
    Delete {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },
    /// List stored tokens
    List {
        /// Show secrets instead of <redacted>
        #[arg(long)]
        reveal_tokens: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum ContextCommands {
    /// Add a context: <name> <tenant> <token name>
    Set {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Rename a context: <old name> <new name>
    Rename {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Delete a context: <name>
    Delete {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },
    /// Make a context current: <name>
    Use {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List contexts
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the current context
    Current {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
