mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};
use time_decoder::ZoneCatalog;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// База зон нужна только convert/zones, поэтому читается лениво
fn load_zones(cli: &Cli) -> ZoneCatalog {
    if cli.bundled_zones {
        ZoneCatalog::bundled()
    } else {
        ZoneCatalog::from_dir(&cli.zoneinfo)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Convert { input, format, tz, no_target, json } => {
            let zones = load_zones(&cli);
            commands::convert::run(input, *format, tz.as_deref(), *no_target, *json, &zones)
        }
        Commands::Guess { input, json } => commands::guess::run(input, *json),
        Commands::Formats => {
            commands::formats::run();
            Ok(())
        }
        Commands::Zones { filter } => {
            let zones = load_zones(&cli);
            commands::zones::run(filter.as_deref(), &zones)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] ОШИБКА: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
