// filesamples-cli/src/lib.rs
//
// Library portion of the filesamples CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, CollectArgs, Commands, ProbeArgs};
pub use commands::collect::run_collect;
pub use commands::probe::run_probe;
