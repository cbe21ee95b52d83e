use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tasklane")]
#[command(about = "Tasklane permission and timeline rules CLI")]
pub struct Cli {
    /// Path to the profile config file (defaults to ~/.tasklane/config.json)
    #[arg(long, env = "TASKLANE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Permission commands (RBAC)
    Permission {
        #[command(subcommand)]
        permission_cmd: PermissionCommand,
    },
    /// Timeline date checks
    Dates {
        #[command(subcommand)]
        dates_cmd: DatesCommand,
    },
    /// Task list views over a JSON export
    Tasks {
        #[command(subcommand)]
        tasks_cmd: TasksCommand,
    },
    /// Profile commands (who rules are evaluated as)
    Profile {
        #[command(subcommand)]
        profile_cmd: ProfileCommand,
    },
}

#[derive(Subcommand)]
pub enum PermissionCommand {
    /// Decide whether an action is allowed
    Check {
        /// Action: create, read, update, delete, assign, manage
        #[arg(long, short = 'a')]
        action: String,
        /// Resource type: project, task, channel, user, role, setting, integration, report
        #[arg(long, short = 'r')]
        resource: String,
        /// Role name (defaults from profile or tasklane.toml)
        #[arg(long, env = "TASKLANE_ROLE")]
        role: Option<String>,
        /// Acting user ID (defaults from profile)
        #[arg(long, env = "TASKLANE_USER")]
        subject: Option<String>,
        /// Owner of the target resource
        #[arg(long)]
        owner: Option<String>,
        /// Resource override level: all, none, specific
        #[arg(long)]
        level: Option<String>,
        /// User listed in a specific override (repeatable)
        #[arg(long = "allow-user")]
        allow_users: Vec<String>,
    },
    /// Show the permissions a role holds, by category
    Matrix {
        /// Role name (defaults from profile or tasklane.toml)
        #[arg(long, env = "TASKLANE_ROLE")]
        role: Option<String>,
    },
    /// Show whether a role may assign tasks to itself
    SelfAssign {
        /// Role name (defaults from profile or tasklane.toml)
        #[arg(long, env = "TASKLANE_ROLE")]
        role: Option<String>,
    },
    /// Print the overrides attached to a newly created project
    Defaults {
        /// Creator user ID
        #[arg(long)]
        creator: String,
    },
    /// Check whether a role may hand out another role
    Delegate {
        /// Role being granted
        target: String,
        /// Acting role (defaults from profile or tasklane.toml)
        #[arg(long, env = "TASKLANE_ROLE")]
        role: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DatesCommand {
    /// Validate task dates against a project
    Validate {
        /// Project due date (YYYY-MM-DD)
        #[arg(long)]
        project_due: NaiveDate,
        /// Project start date (YYYY-MM-DD)
        #[arg(long)]
        project_start: Option<NaiveDate>,
        /// Task start date (YYYY-MM-DD)
        #[arg(long)]
        task_start: Option<NaiveDate>,
        /// Task due date (YYYY-MM-DD)
        #[arg(long)]
        task_due: Option<NaiveDate>,
        /// Apply suggested dates until valid
        #[arg(long)]
        fix: bool,
    },
    /// Validate a milestone date against a project
    Milestone {
        /// Project due date (YYYY-MM-DD)
        #[arg(long)]
        project_due: NaiveDate,
        /// Project start date (YYYY-MM-DD)
        #[arg(long)]
        project_start: Option<NaiveDate>,
        /// Milestone due date (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,
    },
    /// Print a month grid
    Calendar {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        /// First day of the week: mon or sun (defaults from tasklane.toml)
        #[arg(long)]
        week_start: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TasksCommand {
    /// Filter and sort tasks from a JSON file
    List {
        /// JSON array of tasks
        #[arg(long, short = 'f')]
        file: PathBuf,
        /// Case-insensitive title search
        #[arg(long, short = 's')]
        search: Option<String>,
        /// Status, or "all"
        #[arg(long)]
        status: Option<String>,
        /// Priority, or "all"
        #[arg(long)]
        priority: Option<String>,
        /// Project ID, or "all"
        #[arg(long)]
        project: Option<String>,
        /// Assignee user ID, or "all"
        #[arg(long)]
        assignee: Option<String>,
        /// Due on or after (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        /// Due on or before (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
        /// Sort field: dueDate, value, probability, createdAt, updatedAt, title
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Group tasks from a JSON file into board columns by status
    Board {
        /// JSON array of tasks
        #[arg(long, short = 'f')]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Add or replace a profile
    Add {
        /// Profile name
        name: String,
        /// Role name
        #[arg(long)]
        role: String,
        /// User ID (generated if omitted)
        #[arg(long)]
        user: Option<String>,
        /// Organization ID
        #[arg(long)]
        organization: Option<String>,
    },
    /// Switch to a different profile (set as default)
    Use {
        /// Profile name
        name: String,
    },
    /// List all profiles
    List,
    /// Show current profile
    Current,
}
