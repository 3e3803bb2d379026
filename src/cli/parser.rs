use crate::core::chart::ChartFormat;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeline
/// CLI application to record dated events per identity and draw them on a timeline
#[derive(Parser)]
#[command(
    name = "rtimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small timeline CLI: record dated events per identity and render them as a Gantt chart",
    long_about = None
)]
pub struct Cli {
    /// Override the backing store path (useful for tests or a second timeline)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the backing store
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
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

    /// Add an event to the timeline
    ///
    /// An event whose start and finish coincide is a milestone.
    ///
    /// Examples:
    ///   rtimeline add --sole "Ada Lovelace" --start 1842-10-01 --finish 1843-09-01 --event "Notes on the Analytical Engine"
    ///   rtimeline add --sole "Ada Lovelace" --start 1815-12-10 --finish 1815-12-10 --event "Born"
    Add {
        /// Identity the event belongs to
        #[arg(long, default_value = "")]
        sole: String,

        /// Start date (YYYY-MM-DD, DD-MonthName-YYYY or DD/MM/YYYY)
        #[arg(long, default_value = "")]
        start: String,

        /// Finish date, inclusive (same formats as --start)
        #[arg(long, default_value = "")]
        finish: String,

        /// Event description
        #[arg(long, default_value = "")]
        event: String,

        /// Free-text annotation
        #[arg(long = "key-point", default_value = "")]
        key_point: String,
    },

    /// List events in timeline order
    List {
        /// Keep only identities containing this text (case-insensitive)
        #[arg(long, short, default_value = "")]
        search: String,
    },

    /// Render the timeline chart (Vega-Lite JSON or standalone HTML page)
    Chart {
        /// Keep only identities containing this text (case-insensitive)
        #[arg(long, short, default_value = "")]
        search: String,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: ChartFormat,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the (filtered) timeline rows in various formats
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Keep only identities containing this text (case-insensitive)
        #[arg(long, short, default_value = "")]
        search: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the backing store
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (.zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace a damaged store with an empty one
    Reset {
        /// Copy the current store here before resetting
        #[arg(long, value_name = "FILE")]
        backup: Option<String>,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the audit log")]
        print: bool,
    },
}
