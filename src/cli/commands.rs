use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "day", about = concat!("[*] daycard v", env!("CARGO_PKG_VERSION"), " - your morning card in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the whole card
    Show,
    /// Task list operations
    #[command(subcommand)]
    Task(TaskCmd),
    /// Daily schedule operations
    #[command(subcommand)]
    Event(EventCmd),
    /// Quick link operations
    #[command(subcommand)]
    Link(LinkCmd),
    /// Show or set a focus note
    Focus(FocusArgs),
    /// Show or set the quote
    Quote(QuoteArgs),
}

#[derive(Subcommand)]
pub enum TaskCmd {
    /// Add a task to the end of the list
    Add(TaskAddArgs),
    /// Toggle a task's completion
    Done(IdArg),
    /// Replace a task's text
    Edit(TaskEditArgs),
    /// Remove a task
    Rm(IdArg),
}

#[derive(Args)]
pub struct TaskAddArgs {
    /// Task text
    pub text: String,
}

#[derive(Args)]
pub struct TaskEditArgs {
    /// Task id
    pub id: u64,
    /// New text
    pub text: String,
}

#[derive(Subcommand)]
pub enum EventCmd {
    /// Add a schedule entry
    Add(EventAddArgs),
    /// Remove a schedule entry
    Rm(IdArg),
}

#[derive(Args)]
pub struct EventAddArgs {
    /// Time label (free-form, e.g. "09:00")
    pub time: String,
    /// Entry title
    pub title: String,
    /// Entry kind
    #[arg(long, default_value = "focus")]
    pub kind: String,
}

#[derive(Subcommand)]
pub enum LinkCmd {
    /// Add a quick link
    Add(LinkAddArgs),
    /// Remove a quick link
    Rm(IdArg),
}

#[derive(Args)]
pub struct LinkAddArgs {
    /// Link title
    pub title: String,
    /// Link url
    pub url: String,
}

#[derive(Args)]
pub struct FocusArgs {
    /// Which note
    #[arg(value_enum)]
    pub period: FocusPeriod,
    /// New text (omit to print the current value)
    pub text: Option<String>,
}

#[derive(Args)]
pub struct QuoteArgs {
    /// New text (omit to print the current value)
    pub text: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Record id (shown by `day show`)
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FocusPeriod {
    Week,
    Month,
    Quarter,
}
