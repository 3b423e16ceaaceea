//! Command-line interface
//!
//! Argument parsing for the parameter inspection binary.

pub mod commands;

pub use commands::{Command, HasherChoice, Opt};
