use std::process::ExitCode;

use clap::Parser;

use cursor_launcher::alfred::ScriptFilter;
use cursor_launcher::cli::{Cli, Commands};
use cursor_launcher::commands;
use cursor_launcher::config::LauncherConfig;
use cursor_launcher::logging;

fn main() -> ExitCode {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders usage/help itself; bad invocations keep the
            // workflow's exit contract of 1
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli.command {
        Commands::List => run_list(),
        Commands::Open { uri } => run_open(&uri),
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn run_list() -> ExitCode {
    match commands::list(LauncherConfig::default()) {
        Ok(filter) => print_filter(&filter),
        Err(err) => {
            tracing::error!(error = %err, "listing recent projects failed");
            let _ = print_filter(&commands::error_filter(&err));
            ExitCode::from(1)
        }
    }
}

fn run_open(uri: &str) -> ExitCode {
    if let Err(err) = commands::open(LauncherConfig::default(), uri) {
        eprintln!("Error: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn print_filter(filter: &ScriptFilter) -> ExitCode {
    match filter.to_json() {
        Ok(json) => {
            print!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: failed to generate JSON: {err}");
            ExitCode::from(1)
        }
    }
}
