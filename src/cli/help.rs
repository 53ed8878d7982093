//! CLI command-name contract for logging and routing.

use crate::cli::parse::{Commands, ContextCommands, TokenCommands};

/// Command name string for log spans (e.g. "token.rename", "context.use").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Token { command } => format!("token.{}", token_command_name(command)),
        Commands::Context { command } => format!("context.{}", context_command_name(command)),
        Commands::Validate { .. } => "validate".to_string(),
    }
}

pub fn token_command_name(command: &TokenCommands) -> &'static str {
    match command {
        TokenCommands::Set { .. } => "set",
        TokenCommands::Rename { .. } => "rename",
        TokenCommands::Delete { .. } => "delete",
        TokenCommands::List { .. } => "list",
    }
}

pub fn context_command_name(command: &ContextCommands) -> &'static str {
    match command {
        ContextCommands::Set { .. } => "set",
        ContextCommands::Rename { .. } => "rename",
        ContextCommands::Delete { .. } => "delete",
        ContextCommands::Use { .. } => "use",
        ContextCommands::List { .. } => "list",
        ContextCommands::Current { .. } => "current",
    }
}

/// Whether the command can write to either store.
pub fn is_mutating(command: &Commands) -> bool {
    match command {
        Commands::Token { command } => !matches!(command, TokenCommands::List { .. }),
        Commands::Context { command } => !matches!(
            command,
            ContextCommands::List { .. } | ContextCommands::Current { .. }
        ),
        Commands::Validate { .. } => false,
    }
}
