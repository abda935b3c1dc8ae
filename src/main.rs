use acrs::cli::Args;
use acrs::logging::init_logging;
use acrs::{exit_status, run};
use clap::Parser;
use colored::Colorize;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    if let Err(e) = init_logging(&args.log_config) {
        eprintln!("{} initializing logging: {e}", "Error".red());
    }
    log::info!("#Start main()");

    let stdout = io::stdout();
    let result = run(&args, &mut stdout.lock());
    if let Err(e) = &result {
        log::debug!("run() failed: {e:?}");
        eprintln!("{}: {e}", "Error".on_red());
    }

    ExitCode::from(exit_status(&result))
}
