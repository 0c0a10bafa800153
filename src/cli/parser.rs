use crate::config::CompanyAverage;
use crate::export::{ExportFormat, ExportWhat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for stafftime
/// CLI application to track employee attendance with SQLite
#[derive(Parser)]
#[command(
    name = "stafftime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track employee arrival/departure times and compute lateness, overtime and workday averages",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add, remove, list or show employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record (or overwrite) arrival/departure for an employee and day.
    /// Both sides are replaced: a side left out is stored as missing.
    Record {
        /// Employee id
        employee_id: i64,

        /// Day of the record (YYYY-MM-DD)
        date: String,

        /// Arrival time (HH:MM)
        #[arg(
            long = "in",
            help = "Arrival time (HH:MM); if omitted, a stored arrival for the day is cleared"
        )]
        arrival: Option<String>,

        /// Departure time (HH:MM)
        #[arg(
            long = "out",
            help = "Departure time (HH:MM); if omitted, a stored departure for the day is cleared"
        )]
        departure: Option<String>,
    },

    /// List the time records of an employee, most recent first
    Records {
        /// Employee id
        employee_id: i64,
    },

    /// Show or update the company work schedule
    Schedule {
        #[arg(long = "start", help = "Workday start (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Workday end (HH:MM)")]
        end: Option<String>,
    },

    /// Average delay, overtime and workday length
    Stats {
        #[arg(long = "employee", help = "Only show the given employee id")]
        employee: Option<i64>,

        #[arg(
            long = "company-average",
            value_enum,
            help = "How company averages are derived (overrides the config)"
        )]
        company_average: Option<CompanyAverage>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export time records or statistics
    Export {
        #[arg(long, value_enum, default_value = "records")]
        what: ExportWhat,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add a new employee
    Add {
        /// Full name
        name: String,

        /// Job title
        position: String,

        /// Hire date (YYYY-MM-DD, default: today)
        #[arg(long = "hired")]
        hired: Option<String>,
    },

    /// Remove an employee and all of their time records
    Del {
        /// Employee id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List employees ordered by name
    List,

    /// Show one employee with their time records and averages
    Show {
        /// Employee id
        id: i64,
    },
}
