use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for daylog
/// Log what you did during the day, find what you forgot to log
#[derive(Parser)]
#[command(
    name = "daylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time log: record activities, spot unlogged gaps and lay out your day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Log an activity
    Add {
        /// Date of the entry (YYYY-MM-DD, today, yesterday)
        date: String,

        /// Start time (e.g. 9am, 13:30, 0915, 09:15 PM)
        start: String,

        /// End time; omit for an activity still in progress
        end: Option<String>,

        #[arg(long, short, help = "What you did")]
        activity: String,

        #[arg(long, short, help = "Label of the activity")]
        label: Option<String>,

        #[arg(long, help = "How you felt (free text, e.g. focused)")]
        mood: Option<String>,

        #[arg(long, requires = "mood", help = "Mood intensity 1-5 (default 3)")]
        intensity: Option<u8>,
    },

    /// Change an existing entry
    Edit {
        /// Entry id (see `daylog list`)
        id: i64,

        #[arg(long, help = "Move the entry to another date")]
        date: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long, conflicts_with = "clear_end")]
        end: Option<String>,

        #[arg(long = "clear-end", help = "Mark the entry as still in progress")]
        clear_end: bool,

        #[arg(long, short)]
        activity: Option<String>,

        #[arg(long, short)]
        label: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        #[arg(long)]
        intensity: Option<u8>,
    },

    /// Delete one entry or a whole day
    Del {
        /// Date of the entries to delete
        date: String,

        #[arg(long, help = "Entry id to delete for the given date")]
        id: Option<i64>,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's entries")]
        now: bool,
    },

    /// Show the unlogged stretches of a day
    Gaps {
        /// Day to analyse (default: today)
        date: Option<String>,

        #[arg(long, help = "Ignore gaps shorter than this many minutes")]
        min: Option<u32>,
    },

    /// Show a day laid out in lanes, with gaps, totals and coverage
    Timeline {
        /// Day to show (default: today)
        date: Option<String>,
    },

    /// Time spent per label
    Summary {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// How much of each day has been logged
    Coverage {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Manage labels
    Label {
        #[command(subcommand)]
        action: LabelAction,
    },

    /// Show or set the fasting plan of a day
    Fasting {
        /// Day of the plan (default: today)
        date: Option<String>,

        #[arg(long, help = "Eating window in hours (1-24)")]
        window: Option<u32>,

        #[arg(long, help = "Hour the eating window opens (0-23)")]
        start: Option<u32>,

        #[arg(
            long,
            value_name = "FILE",
            conflicts_with_all = ["window", "start"],
            help = "Read the plan from a JSON file ({windowHours, startHour} or legacy {hours, startTime})"
        )]
        import: Option<String>,
    },

    /// Build chat-model prompts (printed as JSON, nothing is sent)
    Prompt {
        #[command(subcommand)]
        action: PromptAction,
    },

    /// Store entries suggested by a chat model to fill a day's gaps
    Recover {
        /// Day to fill
        date: String,

        #[arg(long, value_name = "FILE", help = "File holding the model's JSON answer")]
        response: String,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum LabelAction {
    /// Create a label (or a sub-label with --parent)
    Add {
        name: String,

        #[arg(long, help = "Colour as #RRGGBB")]
        color: Option<String>,

        #[arg(long, help = "Parent label")]
        parent: Option<String>,
    },

    /// Show the label tree
    List,

    /// Rename or recolour a label
    Edit {
        name: String,

        #[arg(long)]
        rename: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a label without sub-labels
    Del { name: String },

    /// Report duplicate or confusing label names
    Check,
}

#[derive(Subcommand)]
pub enum PromptAction {
    /// Prompt turning one sentence into an entry
    Entry {
        text: String,

        #[arg(long, help = "Context about you, sent along with the text")]
        about: Option<String>,
    },

    /// Parse a model answer to `prompt entry` and store it
    Parse {
        /// Date of the entry
        date: String,

        #[arg(long, value_name = "FILE", help = "File holding the model's JSON answer")]
        response: String,
    },

    /// Prompt asking to fill the gaps of a day
    Recover {
        date: String,

        #[arg(long, help = "What you remember doing")]
        text: Option<String>,
    },
}
