use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer and task tracker for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer and task tracker

Work in focused intervals with short and long breaks, keep a local task
list alongside the timer, and sync sessions, tasks, and statistics
through the companion API.

QUICK START:
  pomo timer                 Run the interactive timer
  pomo task add \"Write docs\" Add a task to the local list
  pomo settings set --work 50   Change interval durations
  pomo auth login me@mail.com pw   Log in to the sync API

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Pomodoro timer
    ///
    /// Opens the interactive timer with the task list alongside it.
    /// Work intervals alternate with short breaks; every 4th completed
    /// work interval is followed by a long break. A completed interval
    /// stops the countdown and waits for you to start the next one.
    ///
    /// # Keys
    ///
    ///   space     start / pause the countdown
    ///   r         reset to the start of a work interval
    ///   o         reload settings from disk and restart the cycle
    ///   j/k       move through the task list
    ///   c         toggle the selected task
    ///   x         delete the selected task
    ///   a         add a task (Enter commits, Esc cancels)
    ///   q         quit
    ///
    /// # Examples
    ///
    ///   pomo timer             Interactive timer
    ///   pomo timer --inline    Plain countdown on the current terminal
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// Manage the local task list
    ///
    /// Tasks live on this machine, next to the timer. Each task gets a
    /// stable id shown by 'pomo task list'; use it to toggle or delete.
    ///
    /// # Examples
    ///
    ///   pomo task add "Refactor the parser"
    ///   pomo task list
    ///   pomo task toggle 3
    ///   pomo task delete 3
    Task(TaskArgs),

    /// Show or change timer settings
    ///
    /// Durations are minutes and are clamped to at least 1. Saving
    /// settings always restarts the timer cycle from a work interval.
    ///
    /// # Examples
    ///
    ///   pomo settings show
    ///   pomo settings set --work 50 --short 10
    Settings(SettingsArgs),

    /// Register, log in, or log out of the sync API
    ///
    /// Login stores the returned bearer token and username in
    /// ~/.pomo/session.json; every other API command sends the token.
    /// Logout only removes the local session.
    Auth(AuthArgs),

    /// Manage task records on the sync API
    ///
    /// Records are server-defined JSON documents; create and update take
    /// raw JSON so the schema stays with the server.
    ///
    /// # Examples
    ///
    ///   pomo remote list
    ///   pomo remote create '{"title":"Write docs"}'
    ///   pomo remote update 7 '{"title":"Write docs","done":true}'
    ///   pomo remote delete 7
    Remote(RemoteArgs),

    /// Track pomodoro sessions on the sync API
    Session(SessionArgs),

    /// Track focus sessions and blocked sites on the sync API
    Focus(FocusArgs),

    /// Show productivity statistics from the sync API
    Stats(StatsArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomo completions zsh > ~/.zfunc/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct TimerArgs {
    /// Run a plain countdown on the current terminal instead of the
    /// interactive interface
    #[arg(long)]
    pub inline: bool,
}

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task. Empty or whitespace-only text is ignored.
    Add {
        /// Task text
        text: String,
    },
    /// List all tasks in insertion order
    #[command(alias = "ls")]
    List,
    /// Flip the completed flag of a task
    Toggle {
        /// Task id as shown by 'pomo task list'
        id: u64,
    },
    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task id as shown by 'pomo task list'
        id: u64,
    },
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Change interval durations (minutes, minimum 1)
    Set {
        /// Work interval duration
        #[arg(long)]
        work: Option<u32>,
        /// Short break duration
        #[arg(long)]
        short: Option<u32>,
        /// Long break duration
        #[arg(long)]
        long: Option<u32>,
    },
}

#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account
    Register {
        /// Username for the new account
        username: String,
        /// Email address
        email: String,
        /// Password
        password: String,
    },
    /// Log in with a username or email
    Login {
        /// Username or email address
        login_id: String,
        /// Password
        password: String,
    },
    /// Log out (clears the local session only)
    Logout,
    /// Show who is currently logged in
    Status,
}

#[derive(Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    pub command: RemoteCommands,
}

#[derive(Subcommand)]
pub enum RemoteCommands {
    /// List all task records
    #[command(alias = "ls")]
    List,
    /// Create a task record from raw JSON
    Create {
        /// Record body as JSON
        json: String,
    },
    /// Replace a task record
    Update {
        /// Record id
        id: String,
        /// Record body as JSON
        json: String,
    },
    /// Delete a task record
    #[command(alias = "rm")]
    Delete {
        /// Record id
        id: String,
    },
}

#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommands,
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Start a session. Sends the current timer settings unless
    /// overridden with --settings.
    Start {
        /// Session settings as raw JSON
        #[arg(long)]
        settings: Option<String>,
    },
    /// End a session
    End {
        /// Session id
        id: String,
    },
    /// List sessions
    #[command(alias = "ls")]
    List,
}

#[derive(Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    pub command: FocusCommands,
}

#[derive(Subcommand)]
pub enum FocusCommands {
    /// Start a focus session
    Start {
        /// What this session is for
        goals: String,
    },
    /// End a focus session
    End {
        /// Session id
        id: String,
    },
    /// Manage the blocked-site list
    Sites(SitesArgs),
}

#[derive(Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommands,
}

#[derive(Subcommand)]
pub enum SitesCommands {
    /// List blocked sites
    #[command(alias = "ls")]
    List,
    /// Add a site to the blocked list
    Add {
        /// Site to block, e.g. news.example.com
        site: String,
    },
    /// Remove a site from the blocked list
    #[command(alias = "rm")]
    Remove {
        /// Site to unblock
        site: String,
    },
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommands,
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Overall statistics
    Show,
    /// Today's statistics
    Daily,
    /// This week's statistics
    Weekly,
}
