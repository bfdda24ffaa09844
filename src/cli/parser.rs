use crate::render::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for coretime
/// Terminal dashboard for lab attendance and core-time compliance
#[derive(Parser)]
#[command(
    name = "coretime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance dashboard: weekly hours, presence and core-time violations from the lab API",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (e.g. http://localhost:8000/api)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Use a custom configuration file
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Only log errors
    #[arg(global = true, long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

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

    /// Refresh once and print the dashboard
    Show {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, short = 'o', value_name = "FILE", help = "Write to FILE instead of stdout")]
        output: Option<String>,
    },

    /// Refresh once, run the core-time check for PERIOD and print the patched dashboard
    Check {
        /// Period to check (1-6)
        period: u8,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long = "check-enabled", help = "Enable the check regardless of the configuration")]
        check_enabled: bool,
    },

    /// Live dashboard: refresh periodically and accept commands on stdin
    Watch {
        #[arg(long, short = 'i', value_name = "SECS", help = "Refresh interval in seconds")]
        interval: Option<u64>,

        #[arg(long = "check-enabled", help = "Enable the manual core-time check")]
        check_enabled: bool,
    },

    /// List recorded core-time violations
    Violations,
}
