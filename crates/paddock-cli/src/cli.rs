//! CLI argument definitions for the paddock league manager.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use paddock_model::{DriverId, TeamId};

#[derive(Parser)]
#[command(
    name = "paddock",
    version,
    about = "Paddock - motorsport league manager and season simulator",
    long_about = "Manage a motorsport league: teams, drivers, transfers, \
                  retirements, the hall of fame, and uniform-random season \
                  simulation.\n\nAll state lives in a .pdk league file; every \
                  command loads it, applies one operation, and saves it back."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the league file.
    #[arg(
        long = "league",
        value_name = "PATH",
        default_value = "league.pdk",
        global = true
    )]
    pub league: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new, empty league file.
    Init,

    /// Register a new team on the active grid.
    AddTeam(AddTeamArgs),

    /// Retire a team: it goes bankrupt and its drivers lose their seats.
    RetireTeam {
        /// Team id.
        team: TeamId,
    },

    /// Bring a former team back onto the active grid.
    RestoreTeam {
        /// Team id.
        team: TeamId,
    },

    /// Add a driver to the active roster.
    AddDriver(AddDriverArgs),

    /// Edit an active driver's details or ratings.
    EditDriver(EditDriverArgs),

    /// Transfer an active driver to another active team.
    Transfer {
        /// Driver id.
        driver: DriverId,
        /// Destination team id.
        team: TeamId,
    },

    /// Retire an active driver.
    RetireDriver {
        /// Driver id.
        driver: DriverId,
        /// Reason recorded alongside the retirement.
        #[arg(long = "reason", default_value = "Manual Retirement")]
        reason: String,
    },

    /// Bring a retired driver back to the active roster.
    RestoreDriver {
        /// Driver id.
        driver: DriverId,
    },

    /// Induct an active or retired driver into the hall of fame.
    HallOfFame {
        /// Driver id.
        driver: DriverId,
    },

    /// Simulate one or more championship seasons.
    Simulate(SimulateArgs),

    /// Show the rosters: drivers, teams, former teams, and the hall of fame.
    Roster {
        /// Emit JSON instead of tables.
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the championship history.
    History {
        /// Emit JSON instead of a table.
        #[arg(long = "json")]
        json: bool,
    },
}

#[derive(Args)]
pub struct AddTeamArgs {
    /// Team name.
    #[arg(long = "name")]
    pub name: String,

    /// Team nationality.
    #[arg(long = "nationality")]
    pub nationality: String,
}

#[derive(Args)]
pub struct AddDriverArgs {
    /// Driver name.
    #[arg(long = "name")]
    pub name: String,

    /// Driver nationality.
    #[arg(long = "nationality")]
    pub nationality: String,

    /// Driver age (18-100).
    #[arg(long = "age")]
    pub age: u8,

    /// Racecraft rating (1-100).
    #[arg(long = "racecraft")]
    pub racecraft: u8,

    /// Overtaking rating (1-100).
    #[arg(long = "overtaking")]
    pub overtaking: u8,

    /// IQ rating (1-100).
    #[arg(long = "iq")]
    pub iq: u8,

    /// Focus rating (1-100).
    #[arg(long = "focus")]
    pub focus: u8,

    /// Potential rating (1-100).
    #[arg(long = "potential")]
    pub potential: u8,

    /// Id of the team the driver signs for.
    #[arg(long = "team")]
    pub team: TeamId,
}

#[derive(Args)]
pub struct EditDriverArgs {
    /// Driver id.
    pub driver: DriverId,

    #[arg(long = "name")]
    pub name: Option<String>,

    #[arg(long = "nationality")]
    pub nationality: Option<String>,

    #[arg(long = "age")]
    pub age: Option<u8>,

    #[arg(long = "racecraft")]
    pub racecraft: Option<u8>,

    #[arg(long = "overtaking")]
    pub overtaking: Option<u8>,

    #[arg(long = "iq")]
    pub iq: Option<u8>,

    #[arg(long = "focus")]
    pub focus: Option<u8>,

    #[arg(long = "potential")]
    pub potential: Option<u8>,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of consecutive seasons to run.
    #[arg(long = "seasons", default_value_t = 1)]
    pub seasons: u32,

    /// Seed for reproducible simulation; random when omitted.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
