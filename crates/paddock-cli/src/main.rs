//! Paddock league manager CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use paddock_cli::cli::{Cli, Command, LogFormatArg};
use paddock_cli::commands::{
    run_add_driver, run_add_team, run_edit_driver, run_hall_of_fame, run_history, run_init,
    run_restore_driver, run_restore_team, run_retire_driver, run_retire_team, run_roster,
    run_simulate, run_transfer,
};
use paddock_cli::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Init => run_init(&cli.league),
        Command::AddTeam(args) => run_add_team(&cli.league, args),
        Command::RetireTeam { team } => run_retire_team(&cli.league, *team),
        Command::RestoreTeam { team } => run_restore_team(&cli.league, *team),
        Command::AddDriver(args) => run_add_driver(&cli.league, args),
        Command::EditDriver(args) => run_edit_driver(&cli.league, args),
        Command::Transfer { driver, team } => run_transfer(&cli.league, *driver, *team),
        Command::RetireDriver { driver, reason } => {
            run_retire_driver(&cli.league, *driver, reason)
        }
        Command::RestoreDriver { driver } => run_restore_driver(&cli.league, *driver),
        Command::HallOfFame { driver } => run_hall_of_fame(&cli.league, *driver),
        Command::Simulate(args) => run_simulate(&cli.league, args),
        Command::Roster { json } => run_roster(&cli.league, *json),
        Command::History { json } => run_history(&cli.league, *json),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
