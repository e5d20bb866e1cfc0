use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rClockout
/// CLI application telling you when your working day ends
#[derive(Parser)]
#[command(
    name = "rclockout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute your release time from logged hours and get reminded before it",
    long_about = None
)]
pub struct Cli {
    /// Override the internal log database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two logged intervals, as `H:M` text.
#[derive(Args, Debug, Clone, Default)]
pub struct TimeArgs {
    /// Time already worked today (H:M, e.g. 3:45)
    #[arg(long = "worked", value_name = "H:M")]
    pub worked: Option<String>,

    /// Wall-clock time of the last entry (H:M, e.g. 14:10)
    #[arg(long = "last-in", value_name = "H:M")]
    pub last_in: Option<String>,

    /// Use full modulo-24h arithmetic instead of the configured normalization
    #[arg(long = "modular")]
    pub modular: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the internal log database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only rows of this operation (arm, notify, init, ...)")]
        operation: Option<String>,
    },

    /// Compute the release time
    Calc {
        #[command(flatten)]
        time: TimeArgs,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Compute the release time and wait for the alert before it
    Notify {
        #[command(flatten)]
        time: TimeArgs,

        #[arg(
            long = "offset",
            value_name = "MINUTES",
            value_parser = clap::value_parser!(i64).range(0..=1440),
            help = "Minutes before the release time to fire the alert (default from config)"
        )]
        offset: Option<i64>,
    },

    /// Interactive session reading commands from stdin
    Hud,
}
