//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `collect` command.
/// Scans both media directories and writes the JSON data files.
pub mod collect;

/// Module containing the implementation of the `probe` command.
pub mod probe;
