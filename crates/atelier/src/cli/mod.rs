//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the atelier binary.

mod commands;
mod exchange;
mod serve;

pub use commands::{Cli, Commands};
pub use exchange::{ClientRequest, handle_exchange_command};
pub use serve::handle_serve_command;
