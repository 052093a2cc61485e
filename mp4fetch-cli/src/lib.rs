// mp4fetch-cli/src/lib.rs
//
// Library portion of the mp4fetch CLI application.
// Contains argument definitions, logging setup and command logic.

pub mod cli;
pub mod commands;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::fetch::run_fetch_command;
