use clap::{Parser, Subcommand};

/// Command-line interface definition for rtasklog
/// CLI application to log daily tasks into per-day CSV sheets
#[derive(Parser)]
#[command(
    name = "rtasklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple task logging CLI: record task start times and summarize time per task and context",
    long_about = None
)]
pub struct Cli {
    /// Override the timesheet directory (useful for tests or custom locations)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Fixed summary clock as HH:MM (used by tests)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print extra diagnostics while running
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and timesheet directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Add an entry to the time sheet for today
    Write {
        /// Informal description of the task
        #[arg(required_unless_present = "stop")]
        description: Option<String>,

        /// Flag the current task as an endpoint, its time will not be counted
        #[arg(long, short = 's')]
        stop: bool,

        /// The time of the added line, as HH:MM
        #[arg(long, short = 't')]
        time: Option<String>,

        /// User-defined context, used to group tasks, defaults to description
        #[arg(long, short = 'c')]
        context: Option<String>,

        /// Indicate that the current task is minor, its duration will be
        /// distributed among the other tasks
        #[arg(long, short = 'm')]
        minor: bool,
    },

    /// Print and summarize the time sheet for today
    Read,
}
