//! vue-sfc-rs - single-file component compiler.

use clap::Parser;
use miette::Result;
use std::process::ExitCode;

mod cli;
mod config;
mod runner;

use cli::Args;
use runner::Runner;

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up miette for nice error output
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let runner = Runner::new(args)?;
    let result = runner.run()?;

    eprintln!(
        "compiled {} of {} components in {}ms",
        result.file_count - result.error_count,
        result.file_count,
        result.duration_ms
    );

    if result.error_count > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
