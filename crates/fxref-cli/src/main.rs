mod cli;
mod error;
mod pipeline;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    env_logger::init();
    let _cli = Cli::parse();

    match pipeline::run() {
        Ok(path) => {
            println!("Wrote: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
