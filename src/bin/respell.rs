//! respell CLI binary.

use clap::Parser;
use respell::cli::{args::RespellArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = RespellArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
