//! Command interpreter for the SoulPHYA terminal.
//!
//! The interpreter splits a line into pipeline stages, expands aliases once
//! per stage and dispatches each stage to a [`Builtin`]. Handlers write
//! styled lines to an [`OutputSink`](soulphya_types::output::OutputSink) and
//! return text for the next stage. Slow work is simulated by scheduling lines
//! that a host delivers with [`Terminal::tick`].

pub mod alias;
pub mod builtin;
mod commands;
pub mod completion;
mod dev_commands;
pub mod environment;
mod file_commands;
pub mod files;
pub mod history;
pub mod hooks;
mod interpreter;
pub mod process;
pub mod prompt;
pub mod rng;
pub mod scheduler;
mod shell_commands;
mod spirit_commands;
mod system_commands;
mod text_commands;

/// Alias table with one-level expansion.
pub use alias::AliasTable;
/// Every builtin command with its help metadata.
pub use builtin::Builtin;
/// Result of Tab completion.
pub use completion::Completion;
/// Environment variables with the required set protected.
pub use environment::Environment;
/// Optional host integrations (project runner, file save, meditation mode).
pub use hooks::{HostHooks, NoHooks};
/// Handler context, session state and the terminal itself.
pub use interpreter::{Context, ShellState, Terminal, UNKNOWN_COMMAND_HINT};
/// Line parsing helpers.
pub use interpreter::{Word, lex, split_pipes, tokenize};
/// Directory change without path normalization.
pub use shell_commands::change_directory;
/// Named state for a consciousness level.
pub use spirit_commands::consciousness_state;
/// `wc` counting: (newlines, words, chars).
pub use text_commands::count_text;
