//! CLI module
//!
//! Provides command-line interface for:
//! - query: answer one JSON request
//! - serve: answer line-delimited JSON requests until EOF
//! - export: answer one export request with raw CSV

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod session;

pub use args::{Cli, Command};
pub use commands::{export, export_once, query, query_once, run, run_command, serve, serve_lines};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_requests, write_json, write_raw};
pub use session::Session;
