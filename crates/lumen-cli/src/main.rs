#![forbid(unsafe_code)]

//! `lumen` binary entry point.

mod cli;
mod logging;
mod output;

use std::process;

use cli::{CliError, HELP_TEXT, Parsed, VERSION};

/// Exit status for a `check` that found the pair below threshold.
const EXIT_CHECK_FAILED: i32 = 2;

fn main() {
    logging::init();

    let opts = match cli::parse() {
        Ok(Parsed::Run(opts)) => opts,
        Ok(Parsed::Help) => {
            println!("{HELP_TEXT}");
            process::exit(0);
        }
        Ok(Parsed::Version) => {
            println!("lumen {VERSION}");
            process::exit(0);
        }
        Err(e) => fail(&e),
    };

    match output::execute(&opts) {
        Ok(outcome) => {
            println!("{}", outcome.rendered);
            if !outcome.passed {
                process::exit(EXIT_CHECK_FAILED);
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(err: &CliError) -> ! {
    tracing::debug!(error = ?err, "exiting with error");
    eprintln!("error: {err}");
    if matches!(err, CliError::Usage(_)) {
        eprintln!("Run 'lumen --help' for usage.");
    }
    process::exit(1);
}
