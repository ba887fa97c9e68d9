use clap::Parser;
use owo_colors::{OwoColorize, Style};
use remind_core::error::CoreError;
use remind_core::store::JsonStore;

mod cli;
mod commands;
mod config;
mod output;
mod util;

fn main() {
    let config = config::Config::new().unwrap_or_default();
    let mut store = match JsonStore::open(config.store_path()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::ShowLists(command) => commands::show_lists::show_lists(&store, command),
        cli::Commands::Show(command) => commands::show::show_list(&store, command),
        cli::Commands::ShowAll(command) => commands::show_all::show_all(&store, command),
        cli::Commands::Add(command) => commands::add::add_reminder(&mut store, command),
        cli::Commands::Complete(command) => {
            commands::complete::complete_reminder(&mut store, command)
        }
        cli::Commands::Uncomplete(command) => {
            commands::uncomplete::uncomplete_reminder(&mut store, command)
        }
        cli::Commands::Edit(command) => commands::edit::edit_reminder(&mut store, command),
        cli::Commands::Delete(command) => commands::delete::delete_reminder(&mut store, command),
        cli::Commands::NewList(command) => commands::new_list::new_list(&mut store, command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::ReminderNotFound(s) | CoreError::InvalidInput(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), core_error),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
