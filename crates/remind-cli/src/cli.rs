use clap::{Parser, Subcommand, ValueEnum};

/// A command-line tool to manage reminder lists
#[derive(Parser, Debug)]
#[command(name = "remind", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show all reminder lists
    ShowLists(ShowListsCommand),
    /// Show reminders in a specific list
    Show(ShowCommand),
    /// Show reminders from all lists
    ShowAll(ShowAllCommand),
    /// Add a new reminder to a list
    Add(AddCommand),
    /// Mark a reminder as completed
    Complete(CompleteCommand),
    /// Mark a reminder as not completed
    Uncomplete(UncompleteCommand),
    /// Edit an existing reminder
    Edit(EditCommand),
    /// Delete a reminder
    Delete(DeleteCommand),
    /// Create a new reminder list
    NewList(NewListCommand),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Order by due date, reminders without one last
    DueDate,
    /// Order by creation date
    CreationDate,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowListsCommand {
    /// Output in JSON format
    #[clap(short, long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The name of the reminder list
    pub list_name: String,
    /// Include completed reminders
    #[clap(long)]
    pub include_completed: bool,
    /// Show only completed reminders
    #[clap(long)]
    pub only_completed: bool,
    /// Filter by due date (e.g., 'today', 'tomorrow', '2026-12-25')
    #[clap(long)]
    pub due_date: Option<String>,
    /// Output in JSON format
    #[clap(short, long)]
    pub json: bool,
    /// Sort order
    #[clap(long, value_enum, default_value_t = SortBy::DueDate)]
    pub sort_by: SortBy,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowAllCommand {
    /// Include completed reminders
    #[clap(long)]
    pub include_completed: bool,
    /// Show only completed reminders
    #[clap(long)]
    pub only_completed: bool,
    /// Filter by due date (e.g., 'today', 'tomorrow', '2026-12-25')
    #[clap(long)]
    pub due_date: Option<String>,
    /// Output in JSON format
    #[clap(short, long)]
    pub json: bool,
    /// Sort order
    #[clap(long, value_enum, default_value_t = SortBy::DueDate)]
    pub sort_by: SortBy,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The name of the reminder list
    pub list_name: String,
    /// The reminder text
    pub text: String,
    /// Due date (e.g., 'today', 'tomorrow 3pm', 'next Monday')
    #[clap(long)]
    pub due_date: Option<String>,
    /// Priority level (0-3, where 3 is highest)
    #[clap(long, default_value_t = 0)]
    pub priority: u8,
    /// Additional notes for the reminder
    #[clap(long)]
    pub notes: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompleteCommand {
    /// The name of the reminder list
    pub list_name: String,
    /// The reminder index or ID
    pub identifier: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UncompleteCommand {
    /// The name of the reminder list
    pub list_name: String,
    /// The reminder index or ID
    pub identifier: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The name of the reminder list
    pub list_name: String,
    /// The reminder index or ID
    pub identifier: String,
    /// The new reminder text
    pub text: Option<String>,
    /// New notes for the reminder
    #[clap(long)]
    pub notes: Option<String>,
    /// New due date (e.g., 'today', 'tomorrow 3pm', 'next Monday')
    #[clap(long, conflicts_with = "clear_due_date")]
    pub due_date: Option<String>,
    /// Clear the existing due date
    #[clap(long)]
    pub clear_due_date: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The name of the reminder list
    pub list_name: String,
    /// The reminder index or ID
    pub identifier: String,
    /// Include completed reminders when searching by index
    #[clap(long)]
    pub include_completed: bool,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NewListCommand {
    /// The name of the new list
    pub name: String,
}
