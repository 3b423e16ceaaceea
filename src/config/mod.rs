//! Configuration
//!
//! Command-line flags that pick the network. The chain context consumes the
//! result through `select_network_from_command_line`.

pub mod settings;

pub use settings::{network_from_flags, NetworkArgs};
