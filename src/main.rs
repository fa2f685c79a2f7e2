//! hyperlocal command-line entry point
//!
//! Requests arrive on stdin, responses leave on stdout and logs go to stderr.
//! An error that ends the session (missing dataset, bad config, I/O, failed
//! export) is printed as `CODE: message` and exits with status 1.

use std::process::ExitCode;

use hyperlocal::cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
