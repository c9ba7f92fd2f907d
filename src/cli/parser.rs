use clap::{Parser, Subcommand};

/// Command-line interface definition for parkspot
/// CLI client for the parking reservation service
#[derive(Parser)]
#[command(
    name = "parkspot",
    version = env!("CARGO_PKG_VERSION"),
    about = "A parking reservation CLI: view the parking map, reserve and cancel spots",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for suspicious fields")]
        check: bool,
    },

    /// Show the parking map with availability for a date range
    Map {
        #[arg(long = "from", help = "Start date (YYYY-MM-DD, default today)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD, default start date)")]
        to: Option<String>,

        #[arg(
            long = "electric",
            help = "Require an electric charger (only rows A and F stay available)"
        )]
        electric: bool,
    },

    /// Show your current reservation and check-in status
    Status,

    /// Reserve a parking spot for a date range
    Reserve {
        /// Spot to reserve (row letter + number, e.g. A01)
        spot: String,

        #[arg(long = "from", help = "Start date (YYYY-MM-DD, default today)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD, default start date)")]
        to: Option<String>,

        #[arg(long = "electric", help = "Require an electric charger")]
        electric: bool,
    },

    /// Cancel your current reservation
    Cancel {
        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
