//! ASAP - Entry Point
//!
//! Binary entry point for the batch command surface. Lives in the `asap`
//! facade crate next to the library of the same name.

// Force-link asap-providers to ensure linkme registrations are included
extern crate asap_providers;

use std::process::ExitCode;

use asap::cli::{Cli, EXIT_ERROR, run};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
