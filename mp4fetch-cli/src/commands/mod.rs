// mp4fetch-cli/src/commands/mod.rs
//
// Command implementations for the mp4fetch CLI.

pub mod fetch;
