#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod logging;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();
    match cli::run(std::env::args().skip(1).collect()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
