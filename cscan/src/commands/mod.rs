//! Command implementations for the cscan CLI.
//!
//! Each submodule provides an args struct and a `run_*` entry point for
//! one subcommand.

pub mod classify;
pub mod strip;
